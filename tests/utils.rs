use boilerkit::clock::FixedClock;
use boilerkit::config::{TemplatePaths, TemplateSettings};
use boilerkit::filetypes::FiletypeRegistry;
use boilerkit::fs::LocalFs;
use boilerkit::template::TemplateService;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const NOW: &str = "2009-03-14T10:20:30+01:00";

/// Paths rooted in a fresh temporary directory.
pub fn temp_paths() -> (TempDir, TemplatePaths) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let paths = TemplatePaths::new(dir.path().join("config"), dir.path().join("data"));
    (dir, paths)
}

pub fn settings() -> TemplateSettings {
    TemplateSettings {
        developer: "Jane Doe".into(),
        initials: "JD".into(),
        mail: "jane@example.org".into(),
        company: "Acme".into(),
        ..TemplateSettings::default()
    }
}

/// A service on the local filesystem with the clock pinned to [`NOW`].
pub fn service(paths: &TemplatePaths) -> TemplateService {
    TemplateService::with_collaborators(
        paths.clone(),
        settings(),
        FiletypeRegistry::builtin().expect("builtin filetypes"),
        Box::new(LocalFs::new()),
        Box::new(FixedClock::parse(NOW).expect("valid timestamp")),
    )
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("create parent");
    fs::write(path, content).expect("write file");
}
