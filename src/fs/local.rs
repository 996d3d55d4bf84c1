use crate::error::Result;
use crate::fs::interface::TemplateFs;
use crate::ioutils;
use log::debug;
use std::path::Path;

/// [`TemplateFs`] on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateFs for LocalFs {
    fn read_file(&self, path: &Path) -> Option<String> {
        ioutils::read_file(path)
    }

    fn write_file_if_absent(&self, path: &Path, content: &str) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        ioutils::write_file(content, path)?;
        debug!("Created {}", path.display());
        Ok(true)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        ioutils::create_dir_all(path)
    }

    fn list_files(&self, dir: &Path) -> Vec<String> {
        ioutils::file_names_in(dir)
    }
}
