//! Configuration management for boilerkit
//!
//! - `settings`: the user preference record consumed by placeholder substitution
//! - `loader`: settings file discovery and parsing
//! - `paths`: user and system template directories

pub mod loader;
pub mod paths;
pub mod settings;

pub use loader::load_settings;
pub use paths::TemplatePaths;
pub use settings::TemplateSettings;
