//! Where template files live.

use crate::constants::{
    APP_DIR_NAME, CUSTOM_FILES_SUBDIR, FILETYPES_CONFIG_FILENAME, TEMPLATES_SUBDIR,
};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The user-writable configuration directory and the read-only system data
/// directory. Templates are kept in a `templates/` subdirectory of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl TemplatePaths {
    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self { config_dir: config_dir.into(), data_dir: data_dir.into() }
    }

    /// Platform config directory for boilerkit:
    /// - Linux: `~/.config/boilerkit`
    /// - macOS: `~/Library/Application Support/boilerkit`
    /// - Windows: `%APPDATA%\boilerkit`
    pub fn default_config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(Error::DirectoryNotFound { kind: "config" })?;
        Ok(base.join(APP_DIR_NAME))
    }

    /// Platform data directory for boilerkit (`~/.local/share/boilerkit` on Linux).
    pub fn default_data_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(Error::DirectoryNotFound { kind: "data" })?;
        Ok(base.join(APP_DIR_NAME))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn user_templates_dir(&self) -> PathBuf {
        self.config_dir.join(TEMPLATES_SUBDIR)
    }

    pub fn system_templates_dir(&self) -> PathBuf {
        self.data_dir.join(TEMPLATES_SUBDIR)
    }

    /// Path of a built-in template file such as `fileheader` or `filetype.c`.
    pub fn template_file(&self, shortname: &str) -> PathBuf {
        self.user_templates_dir().join(shortname)
    }

    pub fn user_custom_dir(&self) -> PathBuf {
        self.user_templates_dir().join(CUSTOM_FILES_SUBDIR)
    }

    pub fn system_custom_dir(&self) -> PathBuf {
        self.system_templates_dir().join(CUSTOM_FILES_SUBDIR)
    }

    pub fn filetypes_config(&self) -> PathBuf {
        self.config_dir.join(FILETYPES_CONFIG_FILENAME)
    }
}
