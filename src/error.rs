use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to build filetype patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    /// A filetype id outside the registry was passed in; this is a caller bug.
    #[error("Unknown filetype id: {id}.")]
    UnknownFiletype { id: usize },

    #[error("Unknown filetype '{name}'.")]
    UnknownFiletypeName { name: String },

    #[error("No {what} template available.")]
    TemplateNotFound { what: String },

    #[error("Cannot proceed: could not determine the {kind} directory. Pass it explicitly.")]
    DirectoryNotFound { kind: &'static str },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
