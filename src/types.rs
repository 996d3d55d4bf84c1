//! Common types used across the boilerkit crate.

use serde::Deserialize;
use std::fmt::Display;

/// End-of-line convention used when default template files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eol {
    /// Unix line feed.
    #[default]
    Lf,
    /// Classic Mac carriage return.
    Cr,
    /// Windows carriage return + line feed.
    Crlf,
}

impl Eol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::Cr => "\r",
            Eol::Crlf => "\r\n",
        }
    }

    /// Rewrites the `\n` line endings of `text` to this convention.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Eol::Lf => text.to_string(),
            _ => text.replace('\n', self.as_str()),
        }
    }
}

impl Display for Eol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Eol::Lf => "lf",
            Eol::Cr => "cr",
            Eol::Crlf => "crlf",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_rewrites_line_feeds() {
        assert_eq!(Eol::Lf.apply("a\nb\n"), "a\nb\n");
        assert_eq!(Eol::Cr.apply("a\nb\n"), "a\rb\r");
        assert_eq!(Eol::Crlf.apply("a\nb\n"), "a\r\nb\r\n");
    }

    #[test]
    fn display_eol_variants() {
        assert_eq!(Eol::Lf.to_string(), "lf");
        assert_eq!(Eol::Cr.to_string(), "cr");
        assert_eq!(Eol::Crlf.to_string(), "crlf");
    }

    #[test]
    fn deserializes_lowercase() {
        let eol: Eol = serde_json::from_str(r#""crlf""#).unwrap();
        assert_eq!(eol, Eol::Crlf);
    }
}
