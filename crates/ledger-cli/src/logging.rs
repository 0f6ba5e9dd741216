use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// Initialize a tracing subscriber that writes to stderr.
///
/// Stdout is reserved for the single output line of each command. The
/// filter comes from `RUST_LOG`, defaulting to "warn"; `verbose` forces
/// "debug".
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
