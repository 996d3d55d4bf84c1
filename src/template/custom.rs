//! Custom file templates: arbitrary files in `templates/files/`, named after
//! the file they create (`main.c`, `setup.py`, ...).

use crate::config::TemplatePaths;
use crate::filetypes::{FiletypeId, FiletypeRegistry};
use crate::fs::TemplateFs;
use log::{debug, warn};

/// A custom file template available in the user or system directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTemplate {
    /// File name of the template, also the menu label.
    pub name: String,
    /// Filetype detected from `name`.
    pub filetype: FiletypeId,
}

/// A document produced from a custom template, ready to be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub filename: String,
    pub filetype: FiletypeId,
    pub content: String,
}

/// Lists custom templates from the user and system directories.
///
/// Entries are grouped by filetype ("None" first, then by filetype name)
/// and sorted by name inside a group, ignoring case. A name present in both
/// directories is listed once. The user directory is created when it holds
/// no templates so that it is easy to find.
pub fn list_custom_templates(
    paths: &TemplatePaths,
    registry: &FiletypeRegistry,
    fs: &dyn TemplateFs,
) -> Vec<CustomTemplate> {
    let user_dir = paths.user_custom_dir();
    let mut names = fs.list_files(&user_dir);
    if names.is_empty() {
        if let Err(e) = fs.create_dir_all(&user_dir) {
            warn!("Cannot create {}: {e}", user_dir.display());
        }
    }
    names.extend(fs.list_files(&paths.system_custom_dir()));

    let mut templates: Vec<CustomTemplate> = names
        .into_iter()
        .map(|name| {
            let filetype = registry.detect(&name).id;
            CustomTemplate { name, filetype }
        })
        .collect();

    templates.sort_by_cached_key(|t| {
        let ft_name = match registry.get(t.filetype) {
            Ok(ft) if !ft.id.is_none() => ft.name.to_lowercase(),
            _ => String::new(),
        };
        (!t.filetype.is_none(), ft_name, t.name.to_lowercase(), t.name.clone())
    });
    templates.dedup_by(|next, prev| next.name == prev.name);

    debug!("Found {} custom file templates", templates.len());
    templates
}

/// `untitled` plus the extension of `template_name`, dot included.
pub fn untitled_name_for(template_name: &str) -> String {
    let extension = template_name.rfind('.').map(|i| &template_name[i..]).unwrap_or("");
    format!("{}{extension}", crate::constants::UNTITLED)
}

/// Reads a custom template, preferring the user's copy.
pub fn read_custom_template(
    paths: &TemplatePaths,
    fs: &dyn TemplateFs,
    name: &str,
) -> Option<String> {
    fs.read_file(&paths.user_custom_dir().join(name))
        .or_else(|| fs.read_file(&paths.system_custom_dir().join(name)))
}

/// Custom template names must be plain file names.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
