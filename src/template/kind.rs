use crate::constants::FILETYPE_TEMPLATE_PREFIX;
use crate::error::Result;
use crate::filetypes::{FiletypeId, FiletypeRegistry};
use std::fmt::Display;

/// The built-in template categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    FileHeader,
    Gpl,
    Bsd,
    Function,
    Changelog,
    /// The new-file template of one filetype. For the "None" filetype this
    /// is the empty template used when starting a plain new file.
    Filetype(FiletypeId),
}

impl TemplateKind {
    /// Number of kinds that do not depend on a filetype.
    pub const GENERAL_COUNT: usize = 5;

    /// Kinds that do not depend on a filetype, in slot order.
    pub const GENERAL: [TemplateKind; Self::GENERAL_COUNT] = [
        TemplateKind::FileHeader,
        TemplateKind::Gpl,
        TemplateKind::Bsd,
        TemplateKind::Function,
        TemplateKind::Changelog,
    ];

    /// Slot of a general kind; `None` for filetype templates.
    pub fn general_index(&self) -> Option<usize> {
        match self {
            TemplateKind::FileHeader => Some(0),
            TemplateKind::Gpl => Some(1),
            TemplateKind::Bsd => Some(2),
            TemplateKind::Function => Some(3),
            TemplateKind::Changelog => Some(4),
            TemplateKind::Filetype(_) => None,
        }
    }

    pub fn is_licence(&self) -> bool {
        matches!(self, TemplateKind::Gpl | TemplateKind::Bsd)
    }

    /// Name of the file holding this template in the templates directory.
    pub fn file_name(&self, registry: &FiletypeRegistry) -> Result<String> {
        let name = match self {
            TemplateKind::FileHeader => "fileheader".to_string(),
            TemplateKind::Gpl => "gpl".to_string(),
            TemplateKind::Bsd => "bsd".to_string(),
            TemplateKind::Function => "function".to_string(),
            TemplateKind::Changelog => "changelog".to_string(),
            TemplateKind::Filetype(id) => {
                let ft = registry.get(*id)?;
                format!("{FILETYPE_TEMPLATE_PREFIX}{}", ft.config_extension)
            }
        };
        Ok(name)
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::FileHeader => write!(f, "file header"),
            TemplateKind::Gpl => write!(f, "GPL notice"),
            TemplateKind::Bsd => write!(f, "BSD notice"),
            TemplateKind::Function => write!(f, "function description"),
            TemplateKind::Changelog => write!(f, "changelog entry"),
            TemplateKind::Filetype(id) => write!(f, "filetype template #{id}"),
        }
    }
}
