//! Userscript metadata marker extraction.
//!
//! Each marker is an isolated first-match search over the whole file content,
//! not a combined header parse — markers may appear in any order and only the
//! first occurrence of each counts.

use crate::escape::escape_mdx;
use crate::model::ScriptInfo;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// -- Marker patterns ----------------------------------------------------------
// Case-sensitive, anchored to the literal marker text, rest-of-line capture.

static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@name[[:blank:]]+(.+)").unwrap());

static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@description[[:blank:]]+(.+)").unwrap());

static RE_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@author[[:blank:]]+(.+)").unwrap());

static RE_DOWNLOAD_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@downloadURL[[:blank:]]+(.+)").unwrap());

/// Read a userscript and extract its metadata markers.
pub fn extract_file(path: &Path) -> Result<ScriptInfo> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(extract(&content))
}

/// Extract metadata markers from userscript content.
///
/// Missing markers keep their placeholder defaults; a missing `@downloadURL`
/// leaves `download_url` as `None` for the sidecar fallback to resolve.
pub fn extract(content: &str) -> ScriptInfo {
    let mut info = ScriptInfo::default();
    if let Some(value) = first_match(&RE_NAME, content) {
        info.name = value;
    }
    if let Some(value) = first_match(&RE_DESCRIPTION, content) {
        info.description = value;
    }
    if let Some(value) = first_match(&RE_AUTHOR, content) {
        info.author = value;
    }
    info.download_url = first_match(&RE_DOWNLOAD_URL, content);
    info
}

/// First capture of `re` in `content`, trimmed and escaped.
fn first_match(re: &Regex, content: &str) -> Option<String> {
    re.captures(content).map(|caps| escape_mdx(caps[1].trim()))
}
