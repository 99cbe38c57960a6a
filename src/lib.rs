//! Tracktag - batch tag edits on the current Music selection
//!
//! This library provides the pieces behind the `tracktag` binary: an ordered
//! command-line parser, an interpreter that folds the parsed commands over a
//! session state, and bindings to the external media library application.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod library;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TracktagError {
    /// Command-line parse error
    #[error("{0}")]
    Cli(#[from] cli::CliError),
    /// Failure talking to the media library application
    #[error("Library error: {0}")]
    Library(#[from] library::LibraryError),
}
