//! The built-in filetype table.

/// One row: name, title, config extension, default extension, detection
/// patterns, comment open, comment close.
pub(super) type BuiltinRow = (
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    &'static [&'static str],
    Option<&'static str>,
    Option<&'static str>,
);

/// Row 0 must stay the "None" filetype.
pub(super) const BUILTIN_FILETYPES: &[BuiltinRow] = &[
    ("None", "None", "none", None, &[], None, None),
    ("C", "C source file", "c", Some("c"), &["*.c", "*.h"], Some("/*"), Some("*/")),
    (
        "C++",
        "C++ source file",
        "cpp",
        Some("cpp"),
        &["*.cpp", "*.cxx", "*.c++", "*.cc", "*.h++", "*.hpp", "*.hxx", "*.hh", "*.C", "*.H"],
        Some("//"),
        None,
    ),
    ("C#", "C# source file", "cs", Some("cs"), &["*.cs", "*.vala"], Some("//"), None),
    ("D", "D source file", "d", Some("d"), &["*.d", "*.di"], Some("//"), None),
    ("Java", "Java source file", "java", Some("java"), &["*.java", "*.jsp"], Some("/*"), Some("*/")),
    (
        "Pascal",
        "Pascal source file",
        "pascal",
        Some("pas"),
        &["*.pas", "*.pp", "*.inc", "*.dpr", "*.dpk"],
        Some("{"),
        Some("}"),
    ),
    ("ASM", "Assembler source file", "asm", Some("asm"), &["*.asm"], Some(";"), None),
    (
        "Fortran",
        "Fortran source file (F90)",
        "fortran",
        Some("f90"),
        &["*.f90", "*.f95", "*.f03"],
        Some("!"),
        None,
    ),
    ("Haskell", "Haskell source file", "haskell", Some("hs"), &["*.hs", "*.lhs"], Some("--"), None),
    ("CAML", "(O)Caml source file", "caml", Some("ml"), &["*.ml", "*.mli"], Some("(*"), Some("*)")),
    (
        "Perl",
        "Perl source file",
        "perl",
        Some("pl"),
        &["*.pl", "*.perl", "*.pm", "*.agi", "*.pod"],
        Some("#"),
        None,
    ),
    (
        "PHP",
        "PHP source file",
        "php",
        Some("php"),
        &["*.php", "*.php3", "*.php4", "*.php5", "*.phtml"],
        Some("//"),
        None,
    ),
    ("Javascript", "Javascript source file", "javascript", Some("js"), &["*.js"], Some("//"), None),
    ("Python", "Python source file", "python", Some("py"), &["*.py", "*.pyw"], Some("#"), None),
    ("Ruby", "Ruby source file", "ruby", Some("rb"), &["*.rb", "*.rhtml", "*.ruby"], Some("#"), None),
    ("Tcl", "Tcl source file", "tcl", Some("tcl"), &["*.tcl", "*.tk", "*.wish"], Some("#"), None),
    ("Lua", "Lua source file", "lua", Some("lua"), &["*.lua"], Some("--"), None),
    ("Rust", "Rust source file", "rust", Some("rs"), &["*.rs"], Some("//"), None),
    ("Go", "Go source file", "go", Some("go"), &["*.go"], Some("//"), None),
    (
        "Sh",
        "Shell script file",
        "sh",
        Some("sh"),
        &["*.sh", "configure", "configure.in", "configure.ac", "*.ksh", "*.zsh", "*.ash", "*.bash"],
        Some("#"),
        None,
    ),
    (
        "Make",
        "Makefile",
        "makefile",
        Some("mak"),
        &["*.mak", "*.mk", "GNUmakefile", "makefile", "Makefile", "makefile.*", "Makefile.*"],
        Some("#"),
        None,
    ),
    (
        "XML",
        "XML document",
        "xml",
        Some("xml"),
        &["*.xml", "*.sgml", "*.xsl", "*.xslt", "*.xsd", "*.xhtml"],
        Some("<!--"),
        Some("-->"),
    ),
    (
        "HTML",
        "HTML source file",
        "html",
        Some("html"),
        &["*.htm", "*.html", "*.shtml", "*.hta", "*.htd", "*.htt", "*.cfm"],
        Some("<!--"),
        Some("-->"),
    ),
    ("CSS", "Cascading StyleSheet", "css", Some("css"), &["*.css"], Some("/*"), Some("*/")),
    ("SQL", "SQL Dump file", "sql", Some("sql"), &["*.sql"], Some("--"), None),
    ("LaTeX", "LaTeX source file", "latex", Some("tex"), &["*.tex", "*.sty", "*.idx", "*.ltx"], Some("%"), None),
    ("YAML", "YAML source file", "yaml", Some("yaml"), &["*.yaml", "*.yml"], Some("#"), None),
    ("Markdown", "Markdown source file", "markdown", Some("md"), &["*.md", "*.markdown"], None, None),
    ("Diff", "Diff file", "diff", Some("diff"), &["*.diff", "*.patch", "*.rej"], Some("#"), None),
    (
        "Conf",
        "Config file",
        "conf",
        Some("conf"),
        &["*.conf", "*.ini", "config", "*rc", "*.cfg", "*.desktop"],
        Some("#"),
        None,
    ),
];
