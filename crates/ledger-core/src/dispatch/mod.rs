//! Command dispatcher
//!
//! Routes a flat token list (`index`, `audit`, `export`, `import`) to the
//! engine and reports the outcome as a single tagged line. See
//! [`crate::output`] for the line format.

mod args;

pub use args::{CommandArgs, Flag, FlagValue};

use std::io::{self, Write};
use std::path::Path;

use ledger_fs::list_images;
use ledger_fs::path::default_ledger_path;
use tracing::{debug, error, info};

use crate::output::{Failure, Response};
use crate::{Result, archive, read_ledger, verify, write_ledger};

pub const INDEX_HINT: &str = "index <dir> [-o ledger.csv]";
pub const AUDIT_HINT: &str = "audit -l ledger.csv [-d images_dir]";
pub const EXPORT_HINT: &str = "export -l ledger.csv -o out.zip [-d images_dir]";
pub const EXPORT_OUTPUT_HINT: &str = "export -l ledger.csv -o out.zip";
pub const IMPORT_PLACEHOLDER: &str = "import not implemented yet";

/// Run one command and write its output line to `out`.
///
/// Returns the process exit status. If `out` has been closed by the reader
/// the command still counts as successful and 0 is returned.
pub fn run_command<S, W>(tokens: &[S], out: &mut W) -> i32
where
    S: AsRef<str>,
    W: Write,
{
    let response = dispatch(tokens);

    let line = match response.to_line() {
        Ok(line) => line,
        Err(e) => {
            error!(error = %e, "Failed to render output line");
            return 1;
        }
    };

    match line.write_to(out) {
        Ok(()) => response.exit_code(),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed by reader");
            0
        }
        Err(e) => {
            error!(error = %e, "Failed to write output line");
            1
        }
    }
}

/// Route one command to the engine.
pub fn dispatch<S: AsRef<str>>(tokens: &[S]) -> Response {
    let Some((command, rest)) = tokens.split_first() else {
        return Failure::NoCommand.into();
    };
    let command = command.as_ref();
    let args = CommandArgs::parse(rest);
    debug!(command, ?args, "Dispatching");

    let result = match command {
        "index" => run_index(&args),
        "audit" => run_audit(&args),
        "export" => run_export(&args),
        "import" => Ok(Response::Message {
            msg: IMPORT_PLACEHOLDER,
        }),
        other => Ok(Failure::UnknownCommand {
            cmd: other.to_string(),
        }
        .into()),
    };

    result.unwrap_or_else(|e| {
        error!(command, error = %e, "Command failed");
        Failure::IoError {
            message: e.to_string(),
        }
        .into()
    })
}

fn bad_args(hint: &'static str) -> Response {
    Failure::BadArgs { hint }.into()
}

/// The `-l` value if it names an existing file.
fn locate_ledger(flag: &FlagValue) -> std::result::Result<&str, Failure> {
    match flag.value() {
        Some(path) if Path::new(path).is_file() => Ok(path),
        other => Err(Failure::LedgerNotFound {
            path: other.map(str::to_string),
        }),
    }
}

fn run_index(args: &CommandArgs) -> Result<Response> {
    let Some(directory) = args.positional.as_deref() else {
        return Ok(bad_args(INDEX_HINT));
    };
    let ledger = args
        .output
        .value()
        .map(str::to_string)
        .unwrap_or_else(|| default_ledger_path(directory));

    let files = list_images(directory);
    write_ledger(&ledger, &files)?;

    info!(directory, ledger = %ledger, indexed = files.len(), "Indexed directory");
    Ok(Response::Indexed {
        indexed: files.len(),
        ledger,
    })
}

fn run_audit(args: &CommandArgs) -> Result<Response> {
    if !args.ledger.is_present() {
        return Ok(bad_args(AUDIT_HINT));
    }
    let ledger = match locate_ledger(&args.ledger) {
        Ok(ledger) => ledger,
        Err(failure) => return Ok(failure.into()),
    };
    let images_dir = args.images_dir_for(ledger);

    let entries = read_ledger(ledger)?;
    let result = verify(&entries, &images_dir);

    info!(
        ledger,
        images_dir = %images_dir,
        missing = result.missing.len(),
        extra = result.extra.len(),
        "Audited ledger"
    );
    Ok(Response::Audited(result))
}

fn run_export(args: &CommandArgs) -> Result<Response> {
    if !args.ledger.is_present() || !args.output.is_present() {
        return Ok(bad_args(EXPORT_HINT));
    }
    let ledger = match locate_ledger(&args.ledger) {
        Ok(ledger) => ledger,
        Err(failure) => return Ok(failure.into()),
    };
    let Some(zip_path) = args.output.value() else {
        return Ok(bad_args(EXPORT_OUTPUT_HINT));
    };
    let images_dir = args.images_dir_for(ledger);

    let entries = read_ledger(ledger)?;
    let exported = archive(&images_dir, &entries, zip_path)?;

    info!(ledger, zip = zip_path, exported, "Exported ledger");
    Ok(Response::Exported {
        exported,
        zip: zip_path.to_string(),
    })
}
