//! The query surface: licence blocks, file headers, new-file templates,
//! function descriptions and changelog entries for a given filetype.

use super::comment::make_comment_block;
use super::custom::{
    is_valid_name, list_custom_templates, read_custom_template, untitled_name_for,
    CustomTemplate, NewDocument,
};
use super::kind::TemplateKind;
use super::store::{BootstrapContext, TemplateStore};
use super::substitute::{substitute, SubstitutionTable};
use crate::clock::{Clock, SystemClock};
use crate::config::{load_settings, TemplatePaths, TemplateSettings};
use crate::constants::{indent, UNTITLED};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::filetypes::{FiletypeId, FiletypeRegistry};
use crate::fs::{LocalFs, TemplateFs};
use log::{debug, warn};
use std::path::Path;

/// One entry of a "New with template" menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateDescriptor {
    /// A custom file template, grouped under its filetype.
    Custom(CustomTemplate),
    /// The new-file template of a filetype.
    Filetype { id: FiletypeId, title: String },
}

/// Owns the loaded templates and answers template queries.
///
/// Construct it once, call [`TemplateService::reload`] after template files
/// or preferences change, and drop it on shutdown.
pub struct TemplateService {
    paths: TemplatePaths,
    settings: TemplateSettings,
    registry: FiletypeRegistry,
    fs: Box<dyn TemplateFs>,
    clock: Box<dyn Clock>,
    store: TemplateStore,
}

impl TemplateService {
    /// Creates a service on the local filesystem and wall clock, and loads
    /// the templates.
    pub fn new(
        paths: TemplatePaths,
        settings: TemplateSettings,
        registry: FiletypeRegistry,
    ) -> Self {
        Self::with_collaborators(
            paths,
            settings,
            registry,
            Box::new(LocalFs::new()),
            Box::new(SystemClock),
        )
    }

    /// Creates a service with a custom filesystem and clock.
    pub fn with_collaborators(
        paths: TemplatePaths,
        settings: TemplateSettings,
        registry: FiletypeRegistry,
        fs: Box<dyn TemplateFs>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let store = TemplateStore::empty(registry.len());
        let mut service = Self { paths, settings, registry, fs, clock, store };
        service.reload();
        service
    }

    /// Reads the settings file and filetype overrides from the config
    /// directory of `paths`, then loads the templates.
    pub fn from_paths(paths: TemplatePaths) -> Result<Self> {
        let settings = load_settings(paths.config_dir())?;
        let registry = FiletypeRegistry::builtin()?.with_overrides_file(paths.filetypes_config())?;
        Ok(Self::new(paths, settings, registry))
    }

    /// Re-runs bootstrap, replacing every loaded template.
    pub fn reload(&mut self) {
        let store = TemplateStore::bootstrap(&BootstrapContext {
            paths: &self.paths,
            settings: &self.settings,
            registry: &self.registry,
            fs: self.fs.as_ref(),
            clock: self.clock.as_ref(),
        });
        self.store = store;
    }

    /// Replaces the settings and reloads.
    pub fn reload_with_settings(&mut self, settings: TemplateSettings) {
        self.settings = settings;
        self.reload();
    }

    pub fn paths(&self) -> &TemplatePaths {
        &self.paths
    }

    pub fn settings(&self) -> &TemplateSettings {
        &self.settings
    }

    pub fn registry(&self) -> &FiletypeRegistry {
        &self.registry
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// The GPL or BSD notice as a comment for `filetype`.
    ///
    /// Any other kind yields `None`.
    pub fn licence(&self, filetype: FiletypeId, kind: TemplateKind) -> Result<Option<String>> {
        if !kind.is_licence() {
            debug!("{kind} is not a licence");
            return Ok(None);
        }
        let ft = self.registry.get(filetype)?;
        Ok(self
            .render(kind, self.generic_table())
            .map(|text| make_comment_block(&text, &ft.comment, indent::LICENCE)))
    }

    /// The file header as a comment for `filetype`.
    ///
    /// `{filename}` is the base name of `filename`, or `untitled.<ext>` for
    /// new documents (`untitled` if the filetype has no extension).
    pub fn file_header(
        &self,
        filetype: FiletypeId,
        filename: Option<&Path>,
    ) -> Result<Option<String>> {
        let ft = self.registry.get(filetype)?;
        let shortname = match (filename, &ft.extension) {
            (Some(path), _) => path.basename(),
            (None, Some(ext)) => format!("{UNTITLED}.{ext}"),
            (None, None) => UNTITLED.to_string(),
        };
        let table = self
            .generic_table()
            .with("filename", shortname)
            .with("gpl", self.store.get(TemplateKind::Gpl).unwrap_or_default())
            .with("bsd", self.store.get(TemplateKind::Bsd).unwrap_or_default());

        Ok(self
            .render(TemplateKind::FileHeader, table)
            .map(|header| make_comment_block(&header, &ft.comment, indent::FILE_HEADER)))
    }

    /// The initial content of a new document of `filetype`.
    ///
    /// The "None" filetype gets its template as stored. Other filetypes get
    /// their template with `{fileheader}` filled in, or `None` if the user
    /// has not created one.
    pub fn new_file_template(&self, filetype: FiletypeId) -> Result<Option<String>> {
        self.registry.get(filetype)?;
        let kind = TemplateKind::Filetype(filetype);
        if filetype.is_none() {
            return Ok(self.store.get(kind).map(str::to_string));
        }
        if self.store.template(kind).is_none() {
            return Ok(None);
        }

        let header = self.file_header(filetype, None)?.unwrap_or_default();
        let table = self.generic_table().with("fileheader", header);
        Ok(self.render(kind, table))
    }

    /// The function description comment for `function_name`.
    pub fn function_stub(
        &self,
        filetype: FiletypeId,
        function_name: Option<&str>,
    ) -> Result<Option<String>> {
        let ft = self.registry.get(filetype)?;
        let table = self
            .generic_table()
            .with("functionname", function_name.unwrap_or_default());

        Ok(self
            .render(TemplateKind::Function, table)
            .map(|stub| make_comment_block(&stub, &ft.comment, indent::FUNCTION)))
    }

    /// A ChangeLog entry, `{date}` carrying the time of day as well. Not
    /// commented: ChangeLog files are plain text.
    pub fn changelog_entry(&self) -> Option<String> {
        let table = self
            .generic_table()
            .with("date", self.clock.format(&self.settings.datetime_format));
        self.render(TemplateKind::Changelog, table)
    }

    /// The stored text of `kind`, without further substitution.
    pub fn generic(&self, kind: TemplateKind) -> Option<&str> {
        self.store.get(kind)
    }

    /// Filetypes that have a new-file template, ordered by title.
    pub fn filetype_templates(&self) -> Vec<(FiletypeId, String)> {
        self.registry
            .ids_by_title()
            .into_iter()
            .filter(|id| self.store.filetype(*id).is_some())
            .filter_map(|id| self.registry.get(id).ok().map(|ft| (id, ft.title.clone())))
            .collect()
    }

    /// Custom file templates from the user and system directories.
    pub fn custom_templates(&self) -> Vec<CustomTemplate> {
        list_custom_templates(&self.paths, &self.registry, self.fs.as_ref())
    }

    /// Everything a "New with template" menu shows: custom templates first,
    /// then the filetype templates.
    pub fn available_templates(&self) -> Vec<TemplateDescriptor> {
        let custom = self.custom_templates().into_iter().map(TemplateDescriptor::Custom);
        let filetypes = self
            .filetype_templates()
            .into_iter()
            .map(|(id, title)| TemplateDescriptor::Filetype { id, title });
        custom.chain(filetypes).collect()
    }

    /// Creates a new document from the custom template `name`.
    ///
    /// The document is called `untitled` plus the template's extension and
    /// gets the filetype detected from the template name. Returns `None`
    /// when neither the user nor the system directory has the template.
    pub fn new_from_custom(&self, name: &str) -> Result<Option<NewDocument>> {
        if !is_valid_name(name) {
            return Err(Error::Other(anyhow::anyhow!(
                "Invalid custom template name '{name}'"
            )));
        }
        let Some(content) = read_custom_template(&self.paths, self.fs.as_ref(), name) else {
            warn!("Custom template '{name}' not found");
            return Ok(None);
        };

        let filetype = self.registry.detect(name).id;
        let filename = untitled_name_for(name);
        let header = self
            .file_header(filetype, Some(Path::new(&filename)))?
            .unwrap_or_default();

        let table = self
            .generic_table()
            .with("filename", filename.clone())
            .with("fileheader", header);

        Ok(Some(NewDocument { filename, filetype, content: table.apply(&content) }))
    }

    fn generic_table(&self) -> SubstitutionTable {
        SubstitutionTable::generic(&self.settings, self.clock.as_ref())
    }

    /// Applies `table` to the file text of `kind` in a single pass, so values
    /// resolved here are never substituted again.
    fn render(&self, kind: TemplateKind, table: SubstitutionTable) -> Option<String> {
        substitute(self.store.raw(kind), &table)
    }
}
