//! Whitespace stripping on the targeted field

use std::sync::LazyLock;

use regex::Regex;

use crate::TracktagError;
use crate::commands::State;
use crate::library::MediaLibrary;

type Result<T> = std::result::Result<T, TracktagError>;

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern compiles"));

/// Trim leading and trailing whitespace and collapse internal whitespace
/// runs to a single space, on the targeted field of every selected item.
///
/// # Errors
/// Returns `TracktagError` if the selection or a field cannot be read or
/// written.
pub fn execute(state: &State, library: &mut dyn MediaLibrary) -> Result<()> {
    for item in library.selected_items()? {
        let original = library.get_field(item, &state.target_field)?;
        let stripped = WHITESPACE_RUNS
            .replace_all(original.trim(), " ")
            .into_owned();
        state.log_change(&original, &stripped);
        if state.apply_changes {
            library.set_field(item, &state.target_field, &stripped)?;
        } else {
            state.log("abstaining");
        }
    }
    Ok(())
}
