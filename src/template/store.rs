//! In-memory copy of the built-in templates and the bootstrap that fills it.

use super::defaults::default_content;
use super::kind::TemplateKind;
use super::substitute::SubstitutionTable;
use crate::clock::Clock;
use crate::config::{TemplatePaths, TemplateSettings};
use crate::filetypes::{FiletypeId, FiletypeRegistry};
use crate::fs::TemplateFs;
use log::{debug, info, warn};

/// Everything bootstrap reads from.
pub struct BootstrapContext<'a> {
    pub paths: &'a TemplatePaths,
    pub settings: &'a TemplateSettings,
    pub registry: &'a FiletypeRegistry,
    pub fs: &'a dyn TemplateFs,
    pub clock: &'a dyn Clock,
}

/// A loaded template file: its text as read and with the generic
/// placeholders resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTemplate {
    raw: String,
    resolved: String,
}

impl StoredTemplate {
    pub fn new(raw: String, table: &SubstitutionTable) -> Self {
        let resolved = table.apply(&raw);
        Self { raw, resolved }
    }

    /// File contents, placeholders untouched.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn resolved(&self) -> &str {
        &self.resolved
    }
}

/// Template texts by kind. A slot is either a loaded template or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStore {
    general: [Option<StoredTemplate>; TemplateKind::GENERAL_COUNT],
    filetypes: Vec<Option<StoredTemplate>>,
}

impl TemplateStore {
    /// A store with every slot absent.
    pub fn empty(filetype_count: usize) -> Self {
        Self { general: Default::default(), filetypes: vec![None; filetype_count] }
    }

    /// Makes sure the default template files exist, then loads every
    /// template with the generic placeholders already resolved.
    ///
    /// Nothing here fails: unwritable or unreadable files are logged and
    /// leave their slot absent.
    pub fn bootstrap(ctx: &BootstrapContext<'_>) -> Self {
        let table = SubstitutionTable::generic(ctx.settings, ctx.clock);
        let templates_dir = ctx.paths.user_templates_dir();
        if let Err(e) = ctx.fs.create_dir_all(&templates_dir) {
            warn!("Cannot create templates directory {}: {e}", templates_dir.display());
        }

        let mut store = Self::empty(ctx.registry.len());
        for kind in TemplateKind::GENERAL {
            let text = load_template(ctx, kind, &table);
            store.set(kind, text);
        }
        for ft in ctx.registry.iter() {
            let kind = TemplateKind::Filetype(ft.id);
            let text = load_template(ctx, kind, &table);
            store.set(kind, text);
        }
        info!("Loaded templates from {}", templates_dir.display());
        store
    }

    /// Template of `kind`; absent for unloaded slots and unknown filetypes.
    pub fn template(&self, kind: TemplateKind) -> Option<&StoredTemplate> {
        match kind {
            TemplateKind::Filetype(id) => {
                self.filetypes.get(id.index()).and_then(Option::as_ref)
            }
            general => general
                .general_index()
                .and_then(|index| self.general[index].as_ref()),
        }
    }

    /// Text of `kind` with the generic placeholders resolved.
    pub fn get(&self, kind: TemplateKind) -> Option<&str> {
        self.template(kind).map(StoredTemplate::resolved)
    }

    /// Text of `kind` as read from its file.
    pub fn raw(&self, kind: TemplateKind) -> Option<&str> {
        self.template(kind).map(StoredTemplate::raw)
    }

    /// Resolved text of the new-file template of filetype `id`.
    pub fn filetype(&self, id: FiletypeId) -> Option<&str> {
        self.get(TemplateKind::Filetype(id))
    }

    fn set(&mut self, kind: TemplateKind, text: Option<StoredTemplate>) {
        let slot = match kind {
            TemplateKind::Filetype(id) => self.filetypes.get_mut(id.index()),
            general => general.general_index().map(|index| &mut self.general[index]),
        };
        match slot {
            Some(slot) => *slot = text,
            None => warn!("No slot for {kind}, dropping it"),
        }
    }
}

fn load_template(
    ctx: &BootstrapContext<'_>,
    kind: TemplateKind,
    table: &SubstitutionTable,
) -> Option<StoredTemplate> {
    let file_name = match kind.file_name(ctx.registry) {
        Ok(name) => name,
        Err(e) => {
            warn!("Skipping {kind}: {e}");
            return None;
        }
    };
    let path = ctx.paths.template_file(&file_name);

    if let Some(content) = default_content(kind) {
        let content = ctx.settings.eol.apply(content);
        match ctx.fs.write_file_if_absent(&path, &content) {
            Ok(true) => info!("Created default {kind} template at {}", path.display()),
            Ok(false) => {}
            Err(e) => warn!("Cannot create {}: {e}", path.display()),
        }
    }

    let text = ctx.fs.read_file(&path);
    if text.is_none() {
        debug!("No {kind} template at {}", path.display());
    }
    text.map(|raw| StoredTemplate::new(raw, table))
}
