/// Command line front end.
pub mod cli;

/// Date and time formatting behind a replaceable clock.
pub mod clock;

/// Template settings and directory layout.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// Known filetypes, their comment syntax and filename detection.
pub mod filetypes;

/// Filesystem access used by template loading.
pub mod fs;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Placeholder substitution, comment blocks and the template store.
pub mod template;

pub mod types;
