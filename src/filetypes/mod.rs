//! Filetype registry: language descriptors with comment syntax and file
//! extension, looked up by dense id, by name, or detected from a file name.

mod builtin;
pub mod overrides;

use crate::error::{Error, Result};
use crate::template::comment::CommentSyntax;
use builtin::BUILTIN_FILETYPES;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fmt::Display;
use std::path::Path;

pub use overrides::FiletypeOverride;

/// Dense index into the registry. Id 0 is always the "None" filetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiletypeId(pub usize);

impl FiletypeId {
    pub const NONE: FiletypeId = FiletypeId(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Display for FiletypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A language / file format descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filetype {
    pub id: FiletypeId,
    pub name: String,
    /// Human readable label, used to order menu entries.
    pub title: String,
    /// Suffix of the `filetype.<ext>` template file.
    pub config_extension: String,
    /// Extension given to new untitled documents, without the dot.
    pub extension: Option<String>,
    /// Glob patterns matched against a file's base name.
    pub patterns: Vec<String>,
    pub comment: CommentSyntax,
}

/// All known filetypes, indexed by [`FiletypeId`].
#[derive(Debug, Clone)]
pub struct FiletypeRegistry {
    filetypes: Vec<Filetype>,
    matcher: GlobSet,
    /// Owner of each glob in `matcher`, by glob index.
    glob_owners: Vec<FiletypeId>,
}

impl FiletypeRegistry {
    /// Builds a registry from descriptors; ids are reassigned by position.
    ///
    /// The first descriptor is treated as the "None" filetype.
    pub fn new(mut filetypes: Vec<Filetype>) -> Result<Self> {
        if filetypes.is_empty() {
            return Err(Error::Other(anyhow::anyhow!(
                "A filetype registry needs at least the None filetype"
            )));
        }
        for (index, ft) in filetypes.iter_mut().enumerate() {
            ft.id = FiletypeId(index);
        }

        let mut builder = GlobSetBuilder::new();
        let mut glob_owners = Vec::new();
        for ft in &filetypes {
            for pattern in &ft.patterns {
                builder.add(Glob::new(pattern)?);
                glob_owners.push(ft.id);
            }
        }
        let matcher = builder.build()?;
        debug!(
            "Filetype registry built with {} filetypes and {} patterns",
            filetypes.len(),
            glob_owners.len()
        );

        Ok(Self { filetypes, matcher, glob_owners })
    }

    /// The built-in filetype table.
    pub fn builtin() -> Result<Self> {
        let filetypes = BUILTIN_FILETYPES
            .iter()
            .enumerate()
            .map(|(index, (name, title, conf, ext, patterns, open, close))| Filetype {
                id: FiletypeId(index),
                name: name.to_string(),
                title: title.to_string(),
                config_extension: conf.to_string(),
                extension: ext.map(str::to_string),
                patterns: patterns.iter().map(|p| p.to_string()).collect(),
                comment: CommentSyntax::new(*open, *close),
            })
            .collect();
        Self::new(filetypes)
    }

    /// Number of filetypes; valid ids are `0..len()`.
    pub fn len(&self) -> usize {
        self.filetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filetypes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filetype> {
        self.filetypes.iter()
    }

    /// Looks up a filetype by id; an id outside the registry is a caller error.
    pub fn get(&self, id: FiletypeId) -> Result<&Filetype> {
        self.filetypes.get(id.index()).ok_or(Error::UnknownFiletype { id: id.index() })
    }

    /// Case-insensitive lookup by filetype name.
    pub fn by_name(&self, name: &str) -> Result<&Filetype> {
        self.filetypes
            .iter()
            .find(|ft| ft.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownFiletypeName { name: name.to_string() })
    }

    /// Detects the filetype of `file_name` from its base name.
    ///
    /// The first filetype (in registry order) with a matching pattern wins;
    /// names nothing matches are the "None" filetype.
    pub fn detect<P: AsRef<Path>>(&self, file_name: P) -> &Filetype {
        let file_name = file_name.as_ref();
        let base = file_name.file_name().map(Path::new).unwrap_or(file_name);
        let id = self
            .matcher
            .matches(base)
            .into_iter()
            .map(|glob_index| self.glob_owners[glob_index])
            .min()
            .unwrap_or(FiletypeId::NONE);
        &self.filetypes[id.index()]
    }

    /// Filetype ids ordered by title, the way menus list them.
    pub fn ids_by_title(&self) -> Vec<FiletypeId> {
        let mut ids: Vec<&Filetype> = self.filetypes.iter().collect();
        ids.sort_by_key(|ft| ft.title.to_lowercase());
        ids.into_iter().map(|ft| ft.id).collect()
    }
}
