//! Regex search and replace on the targeted field

use regex::Regex;

use crate::TracktagError;
use crate::commands::State;
use crate::library::MediaLibrary;

type Result<T> = std::result::Result<T, TracktagError>;

/// Replace all non-overlapping matches of `pattern` in the targeted field of
/// every selected item. `$1`-style capture references in the template expand
/// as usual; a missing template deletes the matches.
///
/// # Errors
/// Returns `TracktagError` if the selection or a field cannot be read or
/// written.
pub fn execute(
    state: &State,
    library: &mut dyn MediaLibrary,
    pattern: &Regex,
    template: Option<&str>,
) -> Result<()> {
    let template = template.unwrap_or("");
    for item in library.selected_items()? {
        let original = library.get_field(item, &state.target_field)?;
        let replaced = pattern.replace_all(&original, template).into_owned();
        state.log_change(&original, &replaced);
        if state.apply_changes {
            library.set_field(item, &state.target_field, &replaced)?;
        } else {
            state.log("abstaining");
        }
    }
    Ok(())
}
