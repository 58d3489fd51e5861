//! VFS Shell Binary
//!
//! Loads the document, runs the startup script and then the interactive prompt.

use anyhow::Context;
use clap::Parser;
use vfs_shell::logging::init_logging;
use vfs_shell::tooling::cli::{Cli, CliContext, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.load_config().context("Error loading configuration")?;
    init_logging(&config.logging).context("Error initializing logging")?;

    let mut context = CliContext::new(config).context("Error loading document")?;

    let command = cli.subcommand();
    let mut stdout = std::io::stdout();
    context.execute(&command, &mut stdout)?;
    if let Commands::Shell { .. } = command {
        context.run_interactive()?;
    }
    Ok(())
}
