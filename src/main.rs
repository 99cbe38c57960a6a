//! Tracktag CLI entry point
//!
//! Applies an ordered list of tag edits to the tracks currently selected in
//! the Music application.
//!
//! # Usage
//!
//! ```bash
//! # Strip whitespace from the selected track names
//! tracktag --strip
//!
//! # Drop a "feat. ..." suffix from the artist tag, preview first
//! tracktag -t artist -n -v -r " feat\. .*$" ""
//! tracktag -t artist -r " feat\. .*$" ""
//!
//! # Renumber an album selection 1..n
//! tracktag --renumber
//! ```
//!
//! Commands run left to right; `--tag`, `--verbose`, and `--dry-run` affect
//! only the commands after them.

use colored::Colorize;
use std::process::ExitCode;

use tracktag::TracktagError;
use tracktag::cli::{self, ParseOutcome};
use tracktag::commands;
use tracktag::library::music::MusicApp;

fn run(args: &[String]) -> Result<(), TracktagError> {
    match cli::parse(args)? {
        ParseOutcome::Help => {
            print!("{}", cli::usage());
            Ok(())
        }
        ParseOutcome::Run(program) => {
            let mut library = MusicApp::new();
            if !commands::run_if_running(&program, &mut library)? {
                println!("Music is not running. Nothing to do.");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print!("{}", cli::usage());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
