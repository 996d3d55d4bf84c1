//! Constants used throughout boilerkit

/// Settings file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["boilerkit.yaml", "boilerkit.yml", "boilerkit.json"];

/// Optional per-filetype overrides, looked up next to the settings file
pub const FILETYPES_CONFIG_FILENAME: &str = "filetypes.yaml";

/// Subdirectory of the config and data directories holding template files
pub const TEMPLATES_SUBDIR: &str = "templates";

/// Subdirectory of the templates directory holding custom file templates
pub const CUSTOM_FILES_SUBDIR: &str = "files";

/// Prefix of per-filetype new-file templates, e.g. `filetype.c`
pub const FILETYPE_TEMPLATE_PREFIX: &str = "filetype.";

/// Name used for documents that have not been saved yet
pub const UNTITLED: &str = "untitled";

/// Application directory name below the platform config/data dirs
pub const APP_DIR_NAME: &str = "boilerkit";

/// Product string substituted for `{geanyversion}`
pub const PRODUCT_VERSION: &str = concat!("boilerkit ", env!("CARGO_PKG_VERSION"));

/// Comment indentation widths
pub mod indent {
    pub const LICENCE: usize = 8;
    pub const FILE_HEADER: usize = 8;
    pub const FUNCTION: usize = 3;
}

/// Fallback block comment used when a filetype has no comment syntax
pub mod fallback_comment {
    pub const OPEN: &str = "/*";
    pub const CLOSE: &str = "*/";
}

/// Default date formats (strftime syntax)
pub mod date_formats {
    pub const YEAR: &str = "%Y";
    pub const DATE: &str = "%Y-%m-%d";
    pub const DATETIME: &str = "%d.%m.%Y %H:%M:%S %Z";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
