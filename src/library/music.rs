//! Music.app backend
//!
//! Drives the Music application through `osascript`, one short AppleScript
//! expression per call. Field names pass straight through as AppleScript
//! properties (`name`, `artist`, `album`, `track number`, ...), so an
//! unknown field surfaces as a script failure, which aborts the run.

use std::process::Command;

use super::{ItemId, LibraryError, MediaLibrary, TRACK_NUMBER_FIELD};

/// Application name as addressed by the scripting bridge
const APPLICATION: &str = "Music";

/// Live connection to the Music application
#[derive(Debug)]
pub struct MusicApp {
    application: String,
}

impl MusicApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            application: APPLICATION.to_string(),
        }
    }

    fn run_script(&self, script: &str) -> Result<String, LibraryError> {
        let output = Command::new("osascript").arg("-e").arg(script).output()?;
        if !output.status.success() {
            return Err(LibraryError::Script {
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(strip_script_newline(&String::from_utf8_lossy(&output.stdout)).to_string())
    }

    fn tell(&self, body: &str) -> String {
        format!("tell application \"{}\" to {body}", self.application)
    }
}

impl Default for MusicApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for inclusion in a double-quoted AppleScript literal
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Drop the single newline `osascript` appends to its output.
///
/// Field values can legitimately end in whitespace (stripping it is one of
/// this tool's jobs), so only the bridge's own terminator may be removed.
fn strip_script_newline(output: &str) -> &str {
    output.strip_suffix('\n').unwrap_or(output)
}

impl MediaLibrary for MusicApp {
    fn is_running(&self) -> bool {
        // An unreachable scripting bridge is indistinguishable from the
        // application not running, and gets the same benign treatment.
        self.run_script(&format!(
            "application \"{}\" is running",
            self.application
        ))
        .map(|out| out == "true")
        .unwrap_or(false)
    }

    fn selected_items(&self) -> Result<Vec<ItemId>, LibraryError> {
        let out = self.run_script(&self.tell("count of selection"))?;
        let count: usize = out
            .parse()
            .map_err(|_| LibraryError::UnexpectedOutput { output: out })?;
        Ok((1..=count).map(ItemId).collect())
    }

    fn get_field(&self, item: ItemId, field: &str) -> Result<String, LibraryError> {
        self.run_script(&self.tell(&format!("get {field} of item {} of selection", item.0)))
    }

    fn set_field(&mut self, item: ItemId, field: &str, value: &str) -> Result<(), LibraryError> {
        // Track numbers are integers on the application side; every other
        // field this tool writes is a string.
        let literal = if field == TRACK_NUMBER_FIELD {
            value.to_string()
        } else {
            format!("\"{}\"", escape(value))
        };
        self.run_script(&self.tell(&format!(
            "set {field} of item {} of selection to {literal}",
            item.0
        )))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn script_output_keeps_trailing_whitespace_in_values() {
        assert_eq!(strip_script_newline("Song \n"), "Song ");
        assert_eq!(strip_script_newline("Song\t\n"), "Song\t");
        assert_eq!(strip_script_newline("Song"), "Song");
        assert_eq!(strip_script_newline("\n"), "");
        assert_eq!(strip_script_newline(""), "");
    }

    #[test]
    fn tell_wraps_the_application() {
        let app = MusicApp::new();
        assert_eq!(
            app.tell("count of selection"),
            "tell application \"Music\" to count of selection"
        );
    }
}
