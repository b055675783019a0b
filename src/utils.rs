use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

pub fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Filename for a freshly generated image.
pub fn image_filename(timestamp: u64) -> String {
    format!("enjoy_banana_{timestamp}.png")
}

/// Filename for an image saved out of the gallery; the index keeps two
/// records generated in the same second from clobbering each other.
pub fn gallery_filename(timestamp: u64, index: usize) -> String {
    format!("enjoy_banana_{timestamp}_{index}.png")
}

pub fn write_image(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Trim a prompt for one-line gallery display, keeping char boundaries.
pub fn truncate_prompt(prompt: &str, max_chars: usize) -> String {
    if prompt.chars().count() <= max_chars {
        prompt.to_string()
    } else {
        let cut: String = prompt.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
