//! Sidecar fallback for scripts without an `@downloadURL` marker.
//!
//! `foo.user.js` pairs with `foo.options.json` in the same directory; its
//! `meta.file_url` field carries the published download location.

use crate::escape::escape_mdx;
use crate::model::{SCRIPT_SUFFIX, SIDECAR_SUFFIX};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Default)]
struct Sidecar {
    #[serde(default)]
    meta: Meta,
}

#[derive(Deserialize, Default)]
struct Meta {
    file_url: Option<String>,
}

/// Derive the sidecar path for a userscript:
/// `<base>.user.js` → `<base>.options.json`.
///
/// `None` when the file name does not carry the userscript suffix.
pub fn sidecar_path(script: &Path) -> Option<PathBuf> {
    let name = script.file_name()?.to_str()?;
    let base = name.strip_suffix(SCRIPT_SUFFIX)?;
    Some(script.with_file_name(format!("{base}{SIDECAR_SUFFIX}")))
}

/// Look up `meta.file_url` in the script's sidecar file.
///
/// A missing sidecar or an absent/empty field resolves to `None`. A sidecar
/// that exists but fails to parse is an error for this one script.
pub fn resolve_download_url(script: &Path) -> Result<Option<String>> {
    let Some(path) = sidecar_path(script) else {
        return Ok(None);
    };
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let sidecar: Sidecar = serde_json::from_str(&content)
        .with_context(|| format!("malformed sidecar {}", path.display()))?;
    Ok(sidecar
        .meta
        .file_url
        .filter(|url| !url.is_empty())
        .map(|url| escape_mdx(&url)))
}
