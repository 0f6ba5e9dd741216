//! CLI argument parsing using clap derive
//!
//! The typed commands here only reshape arguments into the flat token list
//! the dispatcher reads. Required-argument checks are left to the
//! dispatcher so that its error codes are the single source of truth.
//! Arguments clap does not know are passed through, not rejected.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

/// Image Ledger - Index, audit and export directories of page images
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true, env = "LEDGER_VERBOSE")]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments clap rejected as unknown, in the order they were removed
    #[arg(skip)]
    pub unknown: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a ledger listing the images in a directory
    ///
    /// Examples:
    ///   ledger index scans/              # writes scans/ledger.csv
    ///   ledger index scans/ -o book.csv  # writes book.csv
    Index {
        /// Directory to scan
        directory: Option<String>,

        /// Ledger path (defaults to <directory>/ledger.csv)
        #[arg(short, long)]
        output: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Zip the images a ledger references
    Export {
        /// Ledger to export
        #[arg(short, long)]
        ledger: Option<String>,

        /// Zip file to create
        #[arg(short, long)]
        output: Option<String>,

        /// Images directory (defaults to the ledger's directory)
        #[arg(short, long)]
        dir: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Compare a ledger with the images actually present
    Audit {
        /// Ledger to audit
        #[arg(short, long)]
        ledger: Option<String>,

        /// Images directory (defaults to the ledger's directory)
        #[arg(short, long)]
        dir: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Import a ledger (not implemented yet)
    Import {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
}

fn push_flag(tokens: &mut Vec<String>, flag: &str, value: Option<String>) {
    if let Some(value) = value {
        tokens.push(flag.to_string());
        tokens.push(value);
    }
}

impl Commands {
    /// Flatten into the dispatcher's token list, followed by `unknown`.
    pub fn into_tokens(self, unknown: Vec<String>) -> Vec<String> {
        let mut tokens = Vec::new();
        match self {
            Self::Index {
                directory,
                output,
                extra,
            } => {
                tokens.push("index".to_string());
                // Without a directory anything after `index` would be read
                // as one, so nothing else is forwarded.
                if let Some(directory) = directory {
                    tokens.push(directory);
                    push_flag(&mut tokens, "-o", output);
                    tokens.extend(extra);
                    tokens.extend(unknown);
                }
                return tokens;
            }
            Self::Export {
                ledger,
                output,
                dir,
                extra,
            } => {
                tokens.push("export".to_string());
                push_flag(&mut tokens, "-l", ledger);
                push_flag(&mut tokens, "-o", output);
                push_flag(&mut tokens, "-d", dir);
                tokens.extend(extra);
            }
            Self::Audit { ledger, dir, extra } => {
                tokens.push("audit".to_string());
                push_flag(&mut tokens, "-l", ledger);
                push_flag(&mut tokens, "-d", dir);
                tokens.extend(extra);
            }
            Self::Import { extra } => {
                tokens.push("import".to_string());
                tokens.extend(extra);
            }
        }
        tokens.extend(unknown);
        tokens
    }
}

/// Position of the flag clap reported as unknown, if it is one of `args`.
/// A `--name=value` token may be reported as `--name`.
fn unknown_arg_index(error: &clap::Error, args: &[OsString]) -> Option<usize> {
    if error.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    let Some(ContextValue::String(invalid)) = error.get(ContextKind::InvalidArg) else {
        return None;
    };
    // Unknown subcommands and stray positionals stay errors.
    if !invalid.starts_with('-') {
        return None;
    }
    let with_value = format!("{invalid}=");
    let matches = |arg: &OsString| {
        arg.to_str()
            .is_some_and(|arg| arg == invalid.as_str() || arg.starts_with(&with_value))
    };
    args.iter().skip(1).position(matches).map(|idx| idx + 1)
}

impl Cli {
    /// Parse `args`, collecting unknown arguments instead of failing on them.
    ///
    /// Each unknown argument is removed and parsing is retried, so a
    /// positional that follows an unknown flag is still bound.
    pub fn try_parse_known_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut unknown = Vec::new();
        loop {
            match Self::try_parse_from(&args) {
                Ok(mut cli) => {
                    cli.unknown = unknown;
                    return Ok(cli);
                }
                Err(error) => {
                    let Some(idx) = unknown_arg_index(&error, &args) else {
                        return Err(error);
                    };
                    let arg = args.remove(idx);
                    unknown.push(arg.to_string_lossy().into_owned());
                }
            }
        }
    }

    /// Parse the process arguments, exiting with clap's usage error when
    /// they cannot be parsed even after dropping unknown arguments.
    pub fn parse_known() -> Self {
        Self::try_parse_known_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Dispatcher tokens for this invocation; empty when no command was given.
    pub fn into_tokens(self) -> Vec<String> {
        let unknown = self.unknown;
        self.command
            .map(|command| command.into_tokens(unknown))
            .unwrap_or_default()
    }
}
