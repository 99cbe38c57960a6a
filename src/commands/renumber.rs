//! Sequential renumbering of the selection

use crate::TracktagError;
use crate::commands::State;
use crate::library::{MediaLibrary, TRACK_NUMBER_FIELD};

type Result<T> = std::result::Result<T, TracktagError>;

/// Assign track numbers 1..n to the selection, in selection order.
///
/// Gated on `apply_changes` like every other mutating command, so a dry run
/// only logs the numbering it would write.
///
/// # Errors
/// Returns `TracktagError` if the selection cannot be read or a write fails.
pub fn execute(state: &State, library: &mut dyn MediaLibrary) -> Result<()> {
    for (index, item) in library.selected_items()?.into_iter().enumerate() {
        let number = (index + 1).to_string();
        state.log(&format!("{item} -> track {number}"));
        if state.apply_changes {
            library.set_field(item, TRACK_NUMBER_FIELD, &number)?;
        } else {
            state.log("abstaining");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::memory::MemoryLibrary;

    #[test]
    fn assigns_sequential_numbers_in_selection_order() {
        let mut library = MemoryLibrary::new();
        library.push_item(&[("name", "A")]);
        library.push_item(&[("name", "B")]);
        library.push_item(&[("name", "C")]);

        execute(&State::default(), &mut library).unwrap();

        assert_eq!(library.field(0, TRACK_NUMBER_FIELD), Some("1"));
        assert_eq!(library.field(1, TRACK_NUMBER_FIELD), Some("2"));
        assert_eq!(library.field(2, TRACK_NUMBER_FIELD), Some("3"));
    }

    #[test]
    fn renumbering_is_idempotent() {
        let mut library = MemoryLibrary::new();
        library.push_item(&[("name", "A"), (TRACK_NUMBER_FIELD, "7")]);
        library.push_item(&[("name", "B"), (TRACK_NUMBER_FIELD, "3")]);

        execute(&State::default(), &mut library).unwrap();
        execute(&State::default(), &mut library).unwrap();

        assert_eq!(library.field(0, TRACK_NUMBER_FIELD), Some("1"));
        assert_eq!(library.field(1, TRACK_NUMBER_FIELD), Some("2"));
    }

    #[test]
    fn respects_dry_run() {
        let mut library = MemoryLibrary::new();
        library.push_item(&[("name", "A"), (TRACK_NUMBER_FIELD, "9")]);

        let state = State {
            apply_changes: false,
            ..State::default()
        };
        execute(&state, &mut library).unwrap();

        assert_eq!(library.field(0, TRACK_NUMBER_FIELD), Some("9"));
    }

    #[test]
    fn empty_selection_is_fine() {
        let mut library = MemoryLibrary::new();
        execute(&State::default(), &mut library).unwrap();
    }
}
