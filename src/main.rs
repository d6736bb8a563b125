//! autoexec - media-center startup configurator
//!
//! Entry point invoked once by the host's startup hook.

use anyhow::Result;
use clap::Parser;

use autoexec::cli::output::display_error;
use autoexec::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
