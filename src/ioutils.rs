use std::path::Path;

use crate::error::{Error, Result};
use log::warn;
use walkdir::WalkDir;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Reads a text file. Missing files give `None`; other read errors are
/// logged and also give `None`. Invalid UTF-8 is replaced, not rejected.
pub fn read_file<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => Some(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Cannot read {}: {e}", path.display());
            None
        }
    }
}

/// File names (not paths) of the regular files directly inside `dir`.
pub fn file_names_in<P: AsRef<Path>>(dir: P) -> Vec<String> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect()
}
