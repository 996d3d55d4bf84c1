mod utils;

use boilerkit::error::Error;
use boilerkit::filetypes::FiletypeId;
use boilerkit::template::{TemplateKind, TemplateService};
use std::fs;
use std::path::Path;
use test_log::test;
use utils::{service, temp_paths, write};

fn id(service: &TemplateService, name: &str) -> FiletypeId {
    service.registry().by_name(name).unwrap().id
}

#[test]
fn first_start_writes_defaults_and_loads_them() {
    let (_dir, paths) = temp_paths();
    let service = service(&paths);

    for name in ["fileheader", "gpl", "bsd", "function", "changelog", "filetype.none"] {
        assert!(paths.template_file(name).is_file(), "{name} was not created");
    }
    let header = service.generic(TemplateKind::FileHeader).unwrap();
    assert!(header.contains("Copyright 2009 Jane Doe <jane@example.org>"));
    assert!(header.contains("{filename}"));
}

#[test]
fn python_file_header_uses_line_comments() {
    let (_dir, paths) = temp_paths();
    let service = service(&paths);
    let python = id(&service, "Python");

    let header = service
        .file_header(python, Some(Path::new("/src/project/hello.py")))
        .unwrap()
        .unwrap();
    let mut lines = header.lines();
    assert_eq!(lines.next(), Some("#       hello.py"));
    assert_eq!(lines.next(), Some("#       "));
    assert_eq!(lines.next(), Some("#       Copyright 2009 Jane Doe <jane@example.org>"));
    assert!(header.lines().all(|line| line.starts_with("#       ")));
    assert!(header.contains("GNU General Public License"));
}

#[test]
fn c_file_header_is_a_framed_block() {
    let (_dir, paths) = temp_paths();
    let service = service(&paths);

    let header = service.file_header(id(&service, "C"), None).unwrap().unwrap();
    assert!(header.starts_with("/*\n *      untitled.c\n"));
    assert!(header.ends_with(" */\n"));
}

#[test]
fn licence_for_unknown_filetype_id_is_an_error() {
    let (_dir, paths) = temp_paths();
    let service = service(&paths);
    let err = service.licence(FiletypeId(10_000), TemplateKind::Gpl).unwrap_err();
    assert!(matches!(err, Error::UnknownFiletype { id: 10_000 }));
}

#[test]
fn bsd_licence_mentions_company() {
    let (_dir, paths) = temp_paths();
    let service = service(&paths);
    let bsd = service.licence(id(&service, "Sh"), TemplateKind::Bsd).unwrap().unwrap();
    assert!(bsd.contains("the Acme nor the names"));
    assert!(bsd.lines().all(|line| line.starts_with('#')));
}

#[test]
fn user_filetype_template_gets_file_header() {
    let (_dir, paths) = temp_paths();
    write(
        &paths.template_file("filetype.python"),
        "#!/usr/bin/env python\n{fileheader}\nprint('{developer}')\n",
    );
    let service = service(&paths);

    let text = service.new_file_template(id(&service, "Python")).unwrap().unwrap();
    assert!(text.starts_with("#!/usr/bin/env python\n#       untitled.py\n"));
    assert!(text.ends_with("print('Jane Doe')\n"));
    assert!(!text.contains("{fileheader}"));
}

#[test]
fn reload_picks_up_edited_templates() {
    let (_dir, paths) = temp_paths();
    let mut service = service(&paths);
    assert!(service.changelog_entry().unwrap().contains("  Jane Doe  <jane@example.org>"));

    fs::write(paths.template_file("changelog"), "{year}: {date} by {initial}\n").unwrap();
    service.reload();
    let entry = service.changelog_entry().unwrap();
    assert!(entry.starts_with("2009: 14.03.2009 10:20:30"));
    assert!(entry.ends_with(" by JD\n"));
}

#[test]
fn deleted_template_is_absent_after_reload() {
    let (_dir, paths) = temp_paths();
    let mut service = service(&paths);
    fs::remove_file(paths.template_file("function")).unwrap();
    fs::create_dir_all(paths.template_file("function")).unwrap();
    service.reload();
    assert_eq!(service.function_stub(id(&service, "C"), Some("main")).unwrap(), None);
}

#[test]
fn settings_are_read_from_config_dir() {
    let (_dir, paths) = temp_paths();
    write(
        &paths.config_dir().join("boilerkit.yaml"),
        "developer: John Smith\nmail: john@example.com\nyear_format: \"year %Y\"\n",
    );
    let service = TemplateService::from_paths(paths.clone()).unwrap();
    assert_eq!(service.settings().developer, "John Smith");
    assert_eq!(service.settings().initials, "JS");
    let header = service.generic(TemplateKind::FileHeader).unwrap();
    assert!(header.contains("Copyright year "));
    assert!(header.contains("John Smith <john@example.com>"));
}

#[test]
fn filetype_overrides_change_comment_syntax() {
    let (_dir, paths) = temp_paths();
    write(
        &paths.filetypes_config(),
        "C:\n  comment_open: \"//\"\n  comment_close: \"\"\n",
    );
    let service = TemplateService::from_paths(paths.clone()).unwrap();
    let stub = service.function_stub(id(&service, "C"), Some("f")).unwrap().unwrap();
    assert!(stub.starts_with("// \n// name: f\n"));
}

#[test]
fn unreadable_config_is_reported() {
    let (_dir, paths) = temp_paths();
    write(&paths.config_dir().join("boilerkit.yaml"), "developer: [unclosed\n");
    let result = TemplateService::from_paths(paths.clone());
    assert!(matches!(result, Err(Error::YamlParseError(_))));
}
