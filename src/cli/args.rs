use crate::constants::{exit_codes, verbosity};
use crate::template::TemplateKind;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Licence notices that can be inserted.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum Licence {
    /// GNU General Public License notice.
    Gpl,
    /// BSD licence notice.
    Bsd,
}

impl From<Licence> for TemplateKind {
    fn from(licence: Licence) -> Self {
        match licence {
            Licence::Gpl => TemplateKind::Gpl,
            Licence::Bsd => TemplateKind::Bsd,
        }
    }
}

impl Display for Licence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Licence::Gpl => "gpl",
            Licence::Bsd => "bsd",
        };
        write!(f, "{s}")
    }
}

/// CLI arguments for boilerkit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User configuration directory holding `templates/` and `boilerkit.yaml`.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// System data directory with read-only custom templates.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create missing default template files and show where they live.
    Init,
    /// Print a licence notice as a comment.
    Licence(LicenceArgs),
    /// Print the file header as a comment.
    Header(HeaderArgs),
    /// Print the initial content of a new file.
    New(FiletypeArgs),
    /// Print a function description comment.
    Function(FunctionArgs),
    /// Print a ChangeLog entry.
    Changelog,
    /// List the available filetype and custom file templates.
    List,
    /// Print a new document created from a custom file template.
    Custom(CustomArgs),
}

/// How the target filetype is chosen.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FiletypeArgs {
    /// Filetype name, e.g. `C`, `Python` (case-insensitive).
    #[arg(short = 't', long)]
    pub filetype: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct LicenceArgs {
    #[command(flatten)]
    pub filetype: FiletypeArgs,

    /// Licence notice to print.
    #[arg(short, long, value_enum, default_value_t = Licence::Gpl)]
    pub licence: Licence,

    /// Detect the filetype from this file name.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub filetype: FiletypeArgs,

    /// File the header is for; also used to detect the filetype.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct FunctionArgs {
    #[command(flatten)]
    pub filetype: FiletypeArgs,

    /// Name of the documented function.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Detect the filetype from this file name.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct CustomArgs {
    /// Custom template file name, as shown by `list`.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingSubcommand
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_licence_command() {
        let cli = Cli::parse_from(["boilerkit", "licence", "-t", "python", "--licence", "bsd"]);
        match cli.command {
            Commands::Licence(args) => {
                assert_eq!(args.filetype.filetype.as_deref(), Some("python"));
                assert_eq!(args.licence, Licence::Bsd);
                assert_eq!(TemplateKind::from(args.licence), TemplateKind::Bsd);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn licence_defaults_to_gpl() {
        let cli = Cli::parse_from(["boilerkit", "licence"]);
        assert!(matches!(cli.command, Commands::Licence(LicenceArgs { licence: Licence::Gpl, .. })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "boilerkit",
            "header",
            "src/main.c",
            "--config-dir",
            "/tmp/cfg",
            "-vv",
        ]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Header(args) => {
                assert_eq!(args.file, Some(PathBuf::from("src/main.c")));
                assert!(args.filetype.filetype.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_function_with_name() {
        let cli = Cli::parse_from(["boilerkit", "function", "main", "--file", "x.c"]);
        match cli.command {
            Commands::Function(args) => {
                assert_eq!(args.name.as_deref(), Some("main"));
                assert_eq!(args.file, Some(PathBuf::from("x.c")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn display_licence_variants() {
        assert_eq!(Licence::Gpl.to_string(), "gpl");
        assert_eq!(Licence::Bsd.to_string(), "bsd");
    }
}
