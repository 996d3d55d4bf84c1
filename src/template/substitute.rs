//! `{name}` placeholder substitution.

use crate::clock::Clock;
use crate::config::TemplateSettings;
use crate::constants::{PRODUCT_VERSION, UNTITLED};
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("constant regex pattern is valid")
});

/// Placeholder names (without braces) mapped to their replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    values: IndexMap<String, String>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The placeholders every template may use: dates, the developer's
    /// details, `{untitled}` and `{geanyversion}`.
    pub fn generic(settings: &TemplateSettings, clock: &dyn Clock) -> Self {
        Self::new()
            .with("year", clock.format(&settings.year_format))
            .with("date", clock.format(&settings.date_format))
            .with("datetime", clock.format(&settings.datetime_format))
            .with("version", &settings.version)
            .with("initial", &settings.initials)
            .with("developer", &settings.developer)
            .with("mail", &settings.mail)
            .with("company", &settings.company)
            .with("untitled", UNTITLED)
            .with("geanyversion", PRODUCT_VERSION)
    }

    /// Sets `name`, replacing an earlier value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replaces every known `{name}` in `text` in a single left-to-right
    /// pass. Inserted values are not scanned again; unknown placeholders
    /// stay as they are.
    pub fn apply(&self, text: &str) -> String {
        if self.values.is_empty() {
            return text.to_string();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Substitutes `table` into `text`; absent text stays absent.
pub fn substitute(text: Option<&str>, table: &SubstitutionTable) -> Option<String> {
    text.map(|text| table.apply(text))
}
