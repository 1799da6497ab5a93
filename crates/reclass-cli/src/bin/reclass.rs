#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use reclass_cli::args::CliArgs;
use reclass_cli::driver;

fn main() -> Result<()> {
    // RECLASS_LOG / RECLASS_LOG_FORMAT, see tracing_config.rs.
    reclass_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let conversion = driver::run(&args)?;

    for warning in &conversion.warnings {
        eprintln!("warning: {warning}");
    }

    if args.out.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(conversion.json.as_bytes())
            .context("failed to write to stdout")?;
        stdout.flush().context("failed to write to stdout")?;
    }
    Ok(())
}
