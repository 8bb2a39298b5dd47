//! usdoc — aggregate userscript metadata into a single MDX catalog.
//!
//! Scans a directory of `*.user.js` files, extracts the `@name`,
//! `@description`, `@author`, and `@downloadURL` header markers, falls back
//! to a `*.options.json` sidecar for missing download URLs, and writes one
//! report listing every script.

mod escape;
mod extract;
mod model;
mod render;
mod sidecar;

use anyhow::{Context, Result};
use clap::Parser;
use model::{ScriptInfo, SCRIPT_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "usdoc",
    about = "Generate an MDX catalog from userscript metadata headers"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, scans the scripts directory.
    files: Vec<String>,

    /// Directory scanned for userscripts when no files are given
    #[arg(short = 's', long, default_value = "./scripts")]
    scripts: PathBuf,

    /// Output file
    #[arg(short = 'o', long, default_value = "./userscripts.mdx")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input_files = if cli.files.is_empty() {
        if !cli.scripts.is_dir() {
            eprintln!(
                "Error: the directory {} does not exist.",
                cli.scripts.display()
            );
            return Ok(());
        }
        discover(&cli.scripts)?
    } else {
        expand_globs(&cli.files)?
    };

    // One result per script — a bad file or sidecar is skipped, not fatal.
    let mut scripts: Vec<ScriptInfo> = Vec::new();
    let mut failures: Vec<(PathBuf, anyhow::Error)> = Vec::new();
    for path in &input_files {
        match process_script(path) {
            Ok(info) => scripts.push(info),
            Err(e) => {
                eprintln!("warning: skipping {}: {e:#}", path.display());
                failures.push((path.clone(), e));
            }
        }
    }

    let report = render::render(&scripts);
    fs::write(&cli.output, &report)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Markdown file has been generated: {}",
        cli.output.display()
    );
    if !failures.is_empty() {
        eprintln!(
            "{} of {} scripts skipped:",
            failures.len(),
            input_files.len()
        );
        for (path, e) in &failures {
            eprintln!("  {}: {e:#}", path.display());
        }
    }
    Ok(())
}

/// Extract one script's metadata, consulting the sidecar when the
/// `@downloadURL` marker is missing.
fn process_script(path: &Path) -> Result<ScriptInfo> {
    let mut info = extract::extract_file(path)?;
    if info.download_url.is_none() {
        info.download_url = sidecar::resolve_download_url(path)?;
    }
    Ok(info)
}

/// Enumerate userscripts directly under `dir` (non-recursive).
fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_userscript(p))
        .collect();
    // Sort for deterministic output
    files.sort();
    Ok(files)
}

fn is_userscript(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SCRIPT_SUFFIX))
}

/// Expand glob patterns into a list of real file paths.
/// Bare directory paths are scanned for userscripts (non-recursive).
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            files.extend(discover(path)?);
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}
