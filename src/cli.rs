//! Command-line parsing
//!
//! The argument list is not a conventional flags-and-subcommand interface: it
//! is an ordered program of operations, applied left to right against the
//! current selection. Each recognized token consumes one, two, or three
//! tokens from the list and appends one [`Command`]. Order is significant:
//! `-t artist -s` strips the artist tag, while `-s -t artist` strips the
//! default tag and only then retargets.
//!
//! `--help` anywhere wins over everything else, and any token that is not a
//! recognized command fails the whole parse with no partial result.

use regex::Regex;
use thiserror::Error;

/// Errors produced while parsing the argument list
#[derive(Debug, Error)]
pub enum CliError {
    /// Token did not match any recognized command
    #[error("Unrecognized command '{0}'")]
    UnrecognizedCommand(String),
    /// A command that takes arguments ran off the end of the argument list
    #[error("Missing argument for '{flag}'")]
    MissingArgument { flag: String },
    /// Replace pattern failed to compile
    #[error("Invalid regex '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

impl CliError {
    #[must_use]
    pub fn missing_argument(flag: &str) -> Self {
        Self::MissingArgument {
            flag: flag.to_string(),
        }
    }

    #[must_use]
    pub fn invalid_regex(pattern: &str, reason: &str) -> Self {
        Self::InvalidRegex {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// One operation parsed from the command line. Immutable once parsed.
#[derive(Debug, Clone)]
pub enum Command {
    /// Strip whitespace from the targeted tag
    Strip,
    /// Regex search and replace on the targeted tag
    Replace {
        pattern: Regex,
        template: Option<String>,
    },
    /// Retarget subsequent commands at another tag
    Tag(String),
    /// Reserved: no command line syntax produces this yet; the interpreter
    /// treats it as a logged no-op
    Filter(Regex),
    /// Log old and new values from here on
    Verbose,
    /// Compute and log changes without writing them back
    DryRun,
    /// Renumber the selection 1..n
    Renumber,
}

// Regex carries no equality; compare patterns by their source text.
impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Strip, Self::Strip)
            | (Self::Verbose, Self::Verbose)
            | (Self::DryRun, Self::DryRun)
            | (Self::Renumber, Self::Renumber) => true,
            (Self::Tag(a), Self::Tag(b)) => a == b,
            (Self::Filter(a), Self::Filter(b)) => a.as_str() == b.as_str(),
            (
                Self::Replace {
                    pattern: pa,
                    template: ta,
                },
                Self::Replace {
                    pattern: pb,
                    template: tb,
                },
            ) => pa.as_str() == pb.as_str() && ta == tb,
            _ => false,
        }
    }
}

impl Eq for Command {}

/// Result of parsing: show help, or run an ordered command program
///
/// Help is not a [`Command`]; keeping it out of the program lets the caller
/// decide how to print and exit instead of the parser terminating the
/// process.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Help,
    Run(Vec<Command>),
}

/// Parse the argument list (program name excluded) into a [`ParseOutcome`].
///
/// Tokens are consumed strictly left to right. `--help`/`-h` anywhere yields
/// `ParseOutcome::Help`, discarding everything parsed so far and all
/// remaining tokens.
///
/// # Errors
/// * `CliError::UnrecognizedCommand` for any token that is not a command.
/// * `CliError::MissingArgument` when `--tag` or `--replace` runs off the
///   end of the list.
/// * `CliError::InvalidRegex` when a replace pattern fails to compile.
pub fn parse(args: &[String]) -> Result<ParseOutcome, CliError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(ParseOutcome::Help);
    }

    let mut commands = Vec::new();
    let mut cursor = 0;

    while cursor < args.len() {
        let token = args[cursor].as_str();
        match token {
            "--verbose" | "-v" => {
                commands.push(Command::Verbose);
                cursor += 1;
            }
            "--dry-run" | "-n" => {
                commands.push(Command::DryRun);
                cursor += 1;
            }
            "--strip" | "-s" => {
                commands.push(Command::Strip);
                cursor += 1;
            }
            "--renumber" | "-e" => {
                commands.push(Command::Renumber);
                cursor += 1;
            }
            "--tag" | "-t" => {
                let name = args
                    .get(cursor + 1)
                    .ok_or_else(|| CliError::missing_argument(token))?;
                commands.push(Command::Tag(name.clone()));
                cursor += 2;
            }
            "--replace" | "-r" => {
                let pattern = args
                    .get(cursor + 1)
                    .ok_or_else(|| CliError::missing_argument(token))?;
                let template = args
                    .get(cursor + 2)
                    .ok_or_else(|| CliError::missing_argument(token))?;
                let compiled = Regex::new(pattern)
                    .map_err(|e| CliError::invalid_regex(pattern, &e.to_string()))?;
                commands.push(Command::Replace {
                    pattern: compiled,
                    template: Some(template.clone()),
                });
                cursor += 3;
            }
            _ => return Err(CliError::UnrecognizedCommand(token.to_string())),
        }
    }

    Ok(ParseOutcome::Run(commands))
}

/// Render the help text shown for `--help` and for an empty invocation
#[must_use]
pub fn usage() -> String {
    [
        "usage: tracktag [commands]",
        "valid commands:",
        "",
        "  --tag,      -t NAME       target a given tag (default: track name)",
        "  --strip,    -s            strip whitespace from the targeted tag",
        "  --replace,  -r PATT TMPL  regex search and replace on the targeted tag",
        "  --renumber, -e            renumber (1..n) the current selection",
        "  --dry-run,  -n            compute and log changes without writing",
        "  --verbose,  -v            log old and new values",
        "  --help,     -h            show this help",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_arguments_parse_to_empty_program() {
        let outcome = parse(&[]).unwrap();
        assert_eq!(outcome, ParseOutcome::Run(Vec::new()));
    }

    #[test]
    fn help_short_circuits_everything_else() {
        for tokens in [
            vec!["--help"],
            vec!["-h"],
            vec!["--verbose", "--help", "--strip"],
            vec!["--tag", "artist", "-h"],
            vec!["--bogus", "-h"],
        ] {
            let outcome = parse(&args(&tokens)).unwrap();
            assert_eq!(outcome, ParseOutcome::Help, "tokens: {tokens:?}");
        }
    }

    #[test]
    fn nullary_commands_parse_in_order() {
        let outcome = parse(&args(&["--verbose", "-n", "--strip", "-e"])).unwrap();
        assert_eq!(
            outcome,
            ParseOutcome::Run(vec![
                Command::Verbose,
                Command::DryRun,
                Command::Strip,
                Command::Renumber,
            ])
        );
    }

    #[test]
    fn tag_consumes_its_argument() {
        let outcome = parse(&args(&["--tag", "artist", "--verbose"])).unwrap();
        assert_eq!(
            outcome,
            ParseOutcome::Run(vec![Command::Tag("artist".into()), Command::Verbose])
        );
    }

    #[test]
    fn replace_consumes_pattern_and_template() {
        let ParseOutcome::Run(commands) = parse(&args(&["--replace", "foo", "bar"])).unwrap()
        else {
            panic!("expected a command program");
        };
        assert_eq!(commands.len(), 1);
        let Command::Replace { pattern, template } = &commands[0] else {
            panic!("expected a replace command");
        };
        assert_eq!(pattern.as_str(), "foo");
        assert_eq!(template.as_deref(), Some("bar"));
    }

    #[test]
    fn flag_like_tokens_are_consumed_as_arguments() {
        // -t eats the next token whatever it looks like
        let outcome = parse(&args(&["-t", "-s"])).unwrap();
        assert_eq!(outcome, ParseOutcome::Run(vec![Command::Tag("-s".into())]));
    }

    #[test]
    fn unrecognized_token_fails_the_whole_parse() {
        let err = parse(&args(&["--verbose", "--bogus", "--strip"])).unwrap_err();
        match err {
            CliError::UnrecognizedCommand(token) => assert_eq!(token, "--bogus"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tag_without_argument_is_a_missing_argument() {
        let err = parse(&args(&["--tag"])).unwrap_err();
        match err {
            CliError::MissingArgument { flag } => assert_eq!(flag, "--tag"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn replace_without_template_is_a_missing_argument() {
        let err = parse(&args(&["-r", "foo"])).unwrap_err();
        match err {
            CliError::MissingArgument { flag } => assert_eq!(flag, "-r"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn replace_with_bad_pattern_is_an_invalid_regex() {
        let err = parse(&args(&["--replace", "(unclosed", "x"])).unwrap_err();
        match err {
            CliError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mixed_program_parses_every_token() {
        let outcome = parse(&args(&[
            "-v", "--tag", "album", "-r", "\\s+", " ", "--renumber",
        ]))
        .unwrap();
        let ParseOutcome::Run(commands) = outcome else {
            panic!("expected a command program");
        };
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], Command::Verbose);
        assert_eq!(commands[1], Command::Tag("album".into()));
        assert!(matches!(&commands[2], Command::Replace { .. }));
        assert_eq!(commands[3], Command::Renumber);
    }
}
