use crate::{
    cli::args::{Cli, Commands, FiletypeArgs},
    config::TemplatePaths,
    error::{Error, Result},
    filetypes::FiletypeId,
    template::{TemplateDescriptor, TemplateService},
};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Executes one CLI command against a freshly loaded [`TemplateService`].
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn run(self) -> Result<()> {
        let paths = resolve_paths(self.cli.config_dir.clone(), self.cli.data_dir.clone())?;
        debug!(
            "Using config dir {} and data dir {}",
            paths.config_dir().display(),
            paths.data_dir().display()
        );
        let service = TemplateService::from_paths(paths)?;
        let mut out = std::io::stdout().lock();
        self.dispatch(&service, &mut out)
    }

    /// Runs the command, writing its result to `out`.
    pub fn dispatch(&self, service: &TemplateService, out: &mut dyn Write) -> Result<()> {
        match &self.cli.command {
            Commands::Init => {
                writeln!(out, "{}", service.paths().user_templates_dir().display())?;
            }
            Commands::Licence(args) => {
                let ft = resolve_filetype(service, &args.filetype, args.file.as_deref())?;
                let text = service.licence(ft, args.licence.into())?;
                emit(out, text, &args.licence.to_string())?;
            }
            Commands::Header(args) => {
                let ft = resolve_filetype(service, &args.filetype, args.file.as_deref())?;
                let text = service.file_header(ft, args.file.as_deref())?;
                emit(out, text, "file header")?;
            }
            Commands::New(args) => {
                let ft = resolve_filetype(service, args, None)?;
                let text = service.new_file_template(ft)?;
                emit(out, text, "new file")?;
            }
            Commands::Function(args) => {
                let ft = resolve_filetype(service, &args.filetype, args.file.as_deref())?;
                let text = service.function_stub(ft, args.name.as_deref())?;
                emit(out, text, "function")?;
            }
            Commands::Changelog => {
                emit(out, service.changelog_entry(), "changelog")?;
            }
            Commands::List => {
                for entry in service.available_templates() {
                    match entry {
                        TemplateDescriptor::Custom(custom) => {
                            let ft = service.registry().get(custom.filetype)?;
                            writeln!(out, "custom\t{}\t{}", ft.name, custom.name)?;
                        }
                        TemplateDescriptor::Filetype { title, .. } => {
                            writeln!(out, "filetype\t{title}")?;
                        }
                    }
                }
            }
            Commands::Custom(args) => {
                let doc = service
                    .new_from_custom(&args.name)?
                    .ok_or_else(|| Error::TemplateNotFound { what: args.name.clone() })?;
                debug!("New document {} ({})", doc.filename, doc.filetype);
                write!(out, "{}", doc.content)?;
            }
        }
        Ok(())
    }
}

fn emit(out: &mut dyn Write, text: Option<String>, what: &str) -> Result<()> {
    let text = text.ok_or_else(|| Error::TemplateNotFound { what: what.to_string() })?;
    write!(out, "{text}")?;
    Ok(())
}

/// Explicit directories win; missing ones come from the platform defaults.
fn resolve_paths(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<TemplatePaths> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => TemplatePaths::default_config_dir()?,
    };
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => TemplatePaths::default_data_dir()?,
    };
    Ok(TemplatePaths::new(config_dir, data_dir))
}

/// `--filetype` by name, else detection from `file`, else None.
fn resolve_filetype(
    service: &TemplateService,
    args: &FiletypeArgs,
    file: Option<&Path>,
) -> Result<FiletypeId> {
    let registry = service.registry();
    if let Some(name) = &args.filetype {
        return Ok(registry.by_name(name)?.id);
    }
    Ok(file.map(|f| registry.detect(f).id).unwrap_or(FiletypeId::NONE))
}

/// Entry point used by the binary.
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::TemplateSettings;
    use crate::filetypes::FiletypeRegistry;
    use crate::fs::LocalFs;
    use clap::Parser;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> TemplateService {
        let paths = TemplatePaths::new(dir.path().join("config"), dir.path().join("data"));
        let settings = TemplateSettings {
            developer: "Jane Doe".into(),
            mail: "jane@example.org".into(),
            ..TemplateSettings::default()
        };
        TemplateService::with_collaborators(
            paths,
            settings,
            FiletypeRegistry::builtin().unwrap(),
            Box::new(LocalFs::new()),
            Box::new(FixedClock::parse("2009-03-14T10:20:30+01:00").unwrap()),
        )
    }

    fn output(args: &[&str], service: &TemplateService) -> Result<String> {
        let runner = Runner::new(Cli::parse_from(args));
        let mut buf = Vec::new();
        runner.dispatch(service, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn function_detects_filetype_from_file() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let text = output(&["boilerkit", "function", "main", "--file", "x.c"], &service).unwrap();
        assert_eq!(text, "/*\n * \n * name: main\n * @param\n * @return\n */\n");
    }

    #[test]
    fn changelog_uses_fixed_clock() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let text = output(&["boilerkit", "changelog"], &service).unwrap();
        assert!(text.starts_with("14.03.2009 10:20:30"));
        assert!(text.contains("  Jane Doe  <jane@example.org>\n"));
    }

    #[test]
    fn unknown_filetype_name_is_an_error() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let err = output(&["boilerkit", "new", "-t", "Klingon"], &service).unwrap_err();
        assert!(matches!(err, Error::UnknownFiletypeName { .. }));
    }

    #[test]
    fn missing_new_file_template_is_reported() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let err = output(&["boilerkit", "new", "-t", "C"], &service).unwrap_err();
        assert_eq!(err.to_string(), "No new file template available.");
    }

    #[test]
    fn missing_custom_template_is_reported() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let err = output(&["boilerkit", "custom", "nope.c"], &service).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn list_shows_none_filetype_template() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let text = output(&["boilerkit", "list"], &service).unwrap();
        assert_eq!(text, "filetype\tNone\n");
    }

    #[test]
    fn explicit_dirs_are_used_verbatim() {
        let paths =
            resolve_paths(Some(PathBuf::from("/a")), Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(paths.config_dir(), Path::new("/a"));
        assert_eq!(paths.data_dir(), Path::new("/b"));
    }

    #[test]
    fn missing_dir_falls_back_to_platform_default() {
        let Ok(default_data) = TemplatePaths::default_data_dir() else {
            return;
        };
        let paths = resolve_paths(Some(PathBuf::from("/a")), None).unwrap();
        assert_eq!(paths.config_dir(), Path::new("/a"));
        assert_eq!(paths.data_dir(), default_data.as_path());
    }
}
