//! User overrides for built-in filetypes, read from `filetypes.yaml`:
//!
//! ```yaml
//! Python:
//!   extension: py3
//! Markdown:
//!   comment_open: "<!--"
//!   comment_close: "-->"
//! ```

use super::{Filetype, FiletypeRegistry};
use crate::error::Result;
use crate::template::comment::CommentSyntax;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use std::path::Path;

/// Fields a user may change on an existing filetype. Unset fields keep the
/// built-in value; an empty string clears an optional value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiletypeOverride {
    pub extension: Option<String>,
    pub comment_open: Option<String>,
    pub comment_close: Option<String>,
    pub patterns: Option<Vec<String>>,
}

impl FiletypeOverride {
    fn apply_to(&self, ft: &mut Filetype) {
        if let Some(extension) = &self.extension {
            ft.extension = Some(extension.clone()).filter(|e| !e.is_empty());
        }
        if self.comment_open.is_some() || self.comment_close.is_some() {
            let open = self
                .comment_open
                .as_deref()
                .or(ft.comment.open())
                .map(str::to_string);
            let close = self
                .comment_close
                .as_deref()
                .or(ft.comment.close())
                .map(str::to_string);
            ft.comment = CommentSyntax::new(open, close);
        }
        if let Some(patterns) = &self.patterns {
            ft.patterns = patterns.clone();
        }
    }
}

impl FiletypeRegistry {
    /// Returns a registry with `overrides` applied, keyed by filetype name.
    ///
    /// Names that match no filetype are logged and skipped.
    pub fn with_overrides(&self, overrides: &IndexMap<String, FiletypeOverride>) -> Result<Self> {
        let mut filetypes = self.filetypes.clone();
        for (name, change) in overrides {
            match filetypes.iter_mut().find(|ft| ft.name.eq_ignore_ascii_case(name)) {
                Some(ft) => {
                    debug!("Applying user settings to filetype {}", ft.name);
                    change.apply_to(ft);
                }
                None => warn!("Ignoring settings for unknown filetype '{name}'"),
            }
        }
        FiletypeRegistry::new(filetypes)
    }

    /// Applies the overrides file at `path` if it exists.
    pub fn with_overrides_file<P: AsRef<Path>>(&self, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(self.clone());
        }
        let content = std::fs::read_to_string(path)?;
        let overrides: IndexMap<String, FiletypeOverride> = if content.trim().is_empty() {
            IndexMap::new()
        } else {
            serde_yaml::from_str(&content)?
        };
        self.with_overrides(&overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn overrides_extension_and_comment() {
        let registry = FiletypeRegistry::builtin().unwrap();
        let mut overrides = IndexMap::new();
        overrides.insert(
            "python".to_string(),
            FiletypeOverride { extension: Some("py3".into()), ..Default::default() },
        );
        overrides.insert(
            "Markdown".to_string(),
            FiletypeOverride {
                comment_open: Some("<!--".into()),
                comment_close: Some("-->".into()),
                ..Default::default()
            },
        );
        let registry = registry.with_overrides(&overrides).unwrap();

        let python = registry.by_name("Python").unwrap();
        assert_eq!(python.extension.as_deref(), Some("py3"));
        assert_eq!(python.comment.open(), Some("#"));

        let markdown = registry.by_name("Markdown").unwrap();
        assert_eq!(markdown.comment.open(), Some("<!--"));
        assert_eq!(markdown.comment.close(), Some("-->"));
    }

    #[test]
    fn empty_close_turns_block_into_line_comment() {
        let registry = FiletypeRegistry::builtin().unwrap();
        let mut overrides = IndexMap::new();
        overrides.insert(
            "C".to_string(),
            FiletypeOverride {
                comment_open: Some("//".into()),
                comment_close: Some(String::new()),
                ..Default::default()
            },
        );
        let registry = registry.with_overrides(&overrides).unwrap();
        let c = registry.by_name("C").unwrap();
        assert_eq!(c.comment.open(), Some("//"));
        assert_eq!(c.comment.close(), None);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let registry = FiletypeRegistry::builtin().unwrap();
        let mut overrides = IndexMap::new();
        overrides.insert("Cobol".to_string(), FiletypeOverride::default());
        let updated = registry.with_overrides(&overrides).unwrap();
        assert_eq!(updated.len(), registry.len());
    }

    #[test]
    fn patterns_change_detection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filetypes.yaml");
        fs::write(&path, "Python:\n  patterns: [\"*.py\", \"SConstruct\"]\n").unwrap();
        let registry = FiletypeRegistry::builtin().unwrap().with_overrides_file(&path).unwrap();
        assert_eq!(registry.detect("SConstruct").name, "Python");
    }

    #[test]
    fn missing_file_keeps_registry() {
        let dir = TempDir::new().unwrap();
        let registry = FiletypeRegistry::builtin()
            .unwrap()
            .with_overrides_file(dir.path().join("filetypes.yaml"))
            .unwrap();
        assert_eq!(registry.by_name("C").unwrap().extension.as_deref(), Some("c"));
    }
}
