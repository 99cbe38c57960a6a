//! Command interpretation
//!
//! The parsed command program is folded left to right over a [`State`]: the
//! state produced by one command is the input to the next. State-only
//! commands (`Verbose`, `DryRun`, `Tag`) just update the session; mutating
//! commands live in their own modules and run against the library through
//! the [`MediaLibrary`] trait.

use colored::Colorize;

use crate::TracktagError;
use crate::cli::Command;
use crate::library::MediaLibrary;

pub mod renumber;
pub mod replace;
pub mod strip;

type Result<T> = std::result::Result<T, TracktagError>;

/// Tag targeted by editing commands until `--tag` says otherwise
pub const DEFAULT_TARGET_FIELD: &str = "name";

/// Session state threaded through the command fold
#[derive(Debug, Clone)]
pub struct State {
    /// False after `--dry-run`: mutating commands compute and log their
    /// effect but never write it back
    pub apply_changes: bool,
    /// Field read and written by the editing commands
    pub target_field: String,
    pub verbose: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            apply_changes: true,
            target_field: DEFAULT_TARGET_FIELD.to_string(),
            verbose: false,
        }
    }
}

impl State {
    pub fn log(&self, msg: &str) {
        if self.verbose {
            println!("{msg}");
        }
    }

    /// Log a before/after pair for one item's field
    pub fn log_change(&self, old: &str, new: &str) {
        if self.verbose {
            println!("  {} {old}", "old:".red());
            println!("  {} {new}", "new:".green());
        }
    }
}

/// Run a program if the application is reachable.
///
/// Returns `Ok(false)` without touching the selection when the application
/// is not running; the caller decides what to print. This is the benign
/// "nothing to do" exit, not an error.
///
/// # Errors
/// Returns `TracktagError` on the first library failure; commands already
/// applied are not rolled back.
pub fn run_if_running(
    commands: &[Command],
    library: &mut dyn MediaLibrary,
) -> Result<bool> {
    if !library.is_running() {
        return Ok(false);
    }
    run(commands, library)?;
    Ok(true)
}

/// Run a whole command program against the library.
///
/// # Errors
/// Returns `TracktagError` on the first library failure; commands already
/// applied are not rolled back.
pub fn run(commands: &[Command], library: &mut dyn MediaLibrary) -> Result<()> {
    let mut state = State::default();
    for command in commands {
        state = apply(state, command, library)?;
    }
    Ok(())
}

/// Apply one command, producing the state for the next one.
///
/// Mutating commands re-fetch the selection themselves, so edits made by an
/// earlier command in the program are visible here.
///
/// # Errors
/// Returns `TracktagError` if the command's library calls fail.
pub fn apply(
    mut state: State,
    command: &Command,
    library: &mut dyn MediaLibrary,
) -> Result<State> {
    match command {
        Command::DryRun => state.apply_changes = false,
        Command::Verbose => state.verbose = true,
        Command::Tag(name) => state.target_field = name.clone(),
        Command::Strip => strip::execute(&state, library)?,
        Command::Replace { pattern, template } => {
            replace::execute(&state, library, pattern, template.as_deref())?;
        }
        Command::Renumber => renumber::execute(&state, library)?,
        Command::Filter(_) => state.log(&format!("doing nothing with {command:?}")),
    }
    Ok(state)
}
