//! Command-line parsing for the `mal` binary.
//!
//! Hand-rolled: two subcommands and one flag do not need an argument
//! parser crate.

pub const USAGE: &str = "\
Usage: mal <command> [options]

Commands:
  run <file>     Evaluate every form in <file>
  eval <expr>    Evaluate <expr> and print each result
  help           Show this message

Options:
  --log <filter>  Log filter (overrides MAL_LOG / RUST_LOG), e.g. mal_eval=trace
";

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { path: String },
    Eval { source: String },
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub command: Command,
    /// Explicit log filter from `--log`.
    pub log_filter: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse the arguments after the program name.
///
/// No arguments at all means [`Command::Help`].
pub fn parse_args(args: &[String]) -> Result<RunOptions, UsageError> {
    let mut log_filter = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log" => {
                let filter = iter.next().ok_or(UsageError::MissingArgument {
                    command: "--log",
                    what: "a filter",
                })?;
                log_filter = Some(filter.clone());
            }
            "-h" | "--help" => {
                return Ok(RunOptions {
                    command: Command::Help,
                    log_filter,
                })
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        [] | ["help"] => Command::Help,
        ["run", path] => Command::Run {
            path: (*path).to_string(),
        },
        ["eval", source] => Command::Eval {
            source: (*source).to_string(),
        },
        ["run"] => {
            return Err(UsageError::MissingArgument {
                command: "run",
                what: "a file path",
            })
        }
        ["eval"] => {
            return Err(UsageError::MissingArgument {
                command: "eval",
                what: "an expression",
            })
        }
        ["help", extra, ..] | ["run" | "eval", _, extra, ..] => {
            return Err(UsageError::UnexpectedArgument((*extra).to_string()))
        }
        [other, ..] => return Err(UsageError::UnknownCommand((*other).to_string())),
    };

    Ok(RunOptions {
        command,
        log_filter,
    })
}
