//! User preferences used to resolve the generic placeholders.

use crate::constants::date_formats;
use crate::types::Eol;
use serde::Deserialize;

/// Read-only preference record. Loaded once, replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default = "TemplateSettings::base")]
pub struct TemplateSettings {
    pub developer: String,
    /// Derived from `developer` when left empty.
    pub initials: String,
    pub mail: String,
    pub company: String,
    pub version: String,
    pub year_format: String,
    pub date_format: String,
    pub datetime_format: String,
    /// Line endings for default template files written on first start.
    pub eol: Eol,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self::base().complete()
    }
}

impl TemplateSettings {
    /// Defaults before derived fields are filled in.
    fn base() -> Self {
        let user = login_name();
        let host = std::env::var("HOSTNAME")
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_string());
        Self {
            initials: String::new(),
            mail: format!("{user}@{host}"),
            developer: user,
            company: String::new(),
            version: "1.0".to_string(),
            year_format: date_formats::YEAR.to_string(),
            date_format: date_formats::DATE.to_string(),
            datetime_format: date_formats::DATETIME.to_string(),
            eol: Eol::default(),
        }
    }

    /// Fills fields that depend on other fields.
    pub(crate) fn complete(mut self) -> Self {
        if self.initials.is_empty() {
            self.initials = initials_of(&self.developer);
        }
        self
    }
}

fn login_name() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// First letter of every word, upper-cased: "Enrico Tröger" -> "ET".
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
