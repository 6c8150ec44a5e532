// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/files.rs
//
// Input discovery and output directory preparation.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constant::IMAGE_EXTENSIONS;

/// Image files directly inside `dir`, sorted by path.
///
/// Only names ending in one of [`IMAGE_EXTENSIONS`] are kept; the match is
/// case-sensitive.
pub fn list_images(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            images.push(entry.path());
        }
    }
    images.sort();
    Ok(images)
}

/// Create `dir` if needed and report whether it already holds entries.
pub fn prepare_output_dir(dir: &Path) -> anyhow::Result<bool> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let mut entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;
    Ok(entries.next().is_some())
}

/// Warn about a non-empty output directory and ask to continue.
///
/// Only an answer of `y` (any case, surrounding whitespace ignored)
/// confirms. End of input counts as a refusal.
pub fn confirm_overwrite<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<bool> {
    writeln!(output, "Warning: The output directory is not empty. Files may be overwritten.")?;
    write!(output, "Do you want to continue? (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
