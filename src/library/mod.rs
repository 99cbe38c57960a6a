//! Media library bindings
//!
//! The host application owns the tracks; this tool only reads and writes
//! named fields on the handles it is given. The [`MediaLibrary`] trait is the
//! whole surface the interpreter needs, so tests substitute
//! [`memory::MemoryLibrary`] for the live [`music::MusicApp`] backend.

use thiserror::Error;

pub mod memory;
pub mod music;

/// Field holding the track's position within its album
pub const TRACK_NUMBER_FIELD: &str = "track number";

/// Handle to one selected track: a 1-based index into the current selection.
///
/// Valid for a single invocation only; the application can reorder or change
/// the selection between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub usize);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors produced while talking to the media library application
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The scripting bridge could not be spawned
    #[error("Failed to run scripting bridge: {0}")]
    Io(#[from] std::io::Error),
    /// The script ran and reported a failure
    #[error("Script failed: {detail}")]
    Script { detail: String },
    /// The script produced output we cannot interpret
    #[error("Unexpected script output '{output}'")]
    UnexpectedOutput { output: String },
    /// A selected item has no such field
    #[error("No field '{field}' on selected item {item}")]
    MissingField { item: ItemId, field: String },
    /// A handle does not refer to any selected item
    #[error("No selected item {item}")]
    UnknownItem { item: ItemId },
}

/// The external media library application, reduced to the four calls this
/// tool makes.
pub trait MediaLibrary {
    /// Whether the application is reachable and running
    fn is_running(&self) -> bool;

    /// Fetch the current selection, in selection order.
    ///
    /// Called at the start of every mutating command rather than cached, so
    /// edits made by one command are visible to the next.
    ///
    /// # Errors
    /// Returns `LibraryError` if the selection cannot be read.
    fn selected_items(&self) -> Result<Vec<ItemId>, LibraryError>;

    /// Read a named field of one selected item as a string.
    ///
    /// # Errors
    /// Returns `LibraryError` if the item or field cannot be read.
    fn get_field(&self, item: ItemId, field: &str) -> Result<String, LibraryError>;

    /// Write a named field of one selected item.
    ///
    /// # Errors
    /// Returns `LibraryError` if the write fails.
    fn set_field(&mut self, item: ItemId, field: &str, value: &str) -> Result<(), LibraryError>;
}
