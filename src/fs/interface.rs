use crate::error::Result;
use std::path::Path;

/// Storage that template files are read from and default files written to.
pub trait TemplateFs {
    /// Returns the file's contents, or `None` if it cannot be read.
    ///
    /// A missing file is a normal condition, not an error.
    fn read_file(&self, path: &Path) -> Option<String>;

    /// Writes `content` to `path` unless something already exists there.
    ///
    /// # Returns
    /// * `Ok(true)` - The file was created
    /// * `Ok(false)` - The file already existed and was left alone
    fn write_file_if_absent(&self, path: &Path, content: &str) -> Result<bool>;

    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Names of the regular files directly inside `dir`, in no particular
    /// order. A missing directory has no files.
    fn list_files(&self, dir: &Path) -> Vec<String>;
}
