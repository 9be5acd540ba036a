//! This module defines all the errors that can occur while executing lpmln-cli.

use thiserror::Error;

/// Error that occur during execution of the CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Error while reading an input file
    #[error("unable to read `{filename}`: {error}")]
    IoReading {
        /// Underlying IO error
        error: std::io::Error,
        /// Name of the file that could not be read
        filename: String,
    },
    /// Error while writing the translated program
    #[error("unable to write `{filename}`: {error}")]
    IoWriting {
        /// Underlying IO error
        error: std::io::Error,
        /// Name of the file that could not be written
        filename: String,
    },
    /// Error while parsing a program file
    #[error("unable to parse program `{filename}`")]
    ProgramParsing {
        /// Filename of the program file
        filename: String,
    },
    /// Error while rewriting a program file
    #[error("unable to translate program `{filename}`")]
    ProgramTranslation {
        /// Filename of the program file
        filename: String,
    },
    /// Error resulting from io operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
