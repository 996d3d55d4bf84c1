//! Settings file loading

use crate::config::settings::TemplateSettings;
use crate::constants::CONFIG_FILENAMES;
use crate::error::Result;
use log::debug;
use std::path::Path;

/// Loads the template settings from the first settings file found in `config_dir`.
///
/// A directory without any settings file yields the defaults; a file that
/// exists but does not parse is an error.
pub fn load_settings<P: AsRef<Path>>(config_dir: P) -> Result<TemplateSettings> {
    let config_dir = config_dir.as_ref();

    for config_file_name in CONFIG_FILENAMES.iter() {
        let config_file_path = config_dir.join(config_file_name);

        if config_file_path.exists() {
            debug!("Loading settings from {}", config_file_path.display());
            let content = std::fs::read_to_string(&config_file_path)?;
            let settings: TemplateSettings = match *config_file_name {
                "boilerkit.json" => serde_json::from_str(&content)?,
                "boilerkit.yaml" | "boilerkit.yml" => serde_yaml::from_str(&content)?,
                _ => unreachable!(),
            };
            return Ok(settings.complete());
        }
    }

    debug!(
        "No settings file found in '{}'. Tried: {}. Using defaults.",
        config_dir.display(),
        CONFIG_FILENAMES.join(", ")
    );
    Ok(TemplateSettings::default())
}
