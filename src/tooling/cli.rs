//! CLI Tooling
//!
//! Command-line interface for the VFS shell: configuration loading, document
//! loading and the three run modes (interactive shell, script, one-shot exec).

use crate::config::{paths, ConfigLoader, ShellConfig};
use crate::document::load_document;
use crate::error::ShellError;
use crate::shell::{self, LineOutcome, Shell};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// VFS shell - in-memory virtual filesystem driven by shell commands
#[derive(Parser)]
#[command(name = "vfs")]
#[command(about = "In-memory virtual filesystem loaded from a JSON document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides ./vfs.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backing JSON document (created with default content if missing)
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the startup script, then prompt for commands (default)
    Shell {
        /// Startup script (overrides configuration)
        #[arg(long, conflicts_with = "no_script")]
        script: Option<PathBuf>,
        /// Skip the startup script
        #[arg(long)]
        no_script: bool,
    },
    /// Run a script file and exit
    Script {
        /// Script to execute
        path: PathBuf,
    },
    /// Run a single command line and exit
    Exec {
        /// Command name followed by its arguments
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Shell {
            script: None,
            no_script: false,
        }
    }
}

impl Cli {
    /// Load configuration and apply CLI overrides.
    pub fn load_config(&self) -> Result<ShellConfig, ShellError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir()?)?,
        };

        if let Some(document) = &self.document {
            config.document = document.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(Commands::Shell { script, no_script }) = &self.command {
            if *no_script {
                config.startup_script = None;
            } else if let Some(script) = script {
                config.startup_script = Some(script.clone());
            }
        }
        Ok(config)
    }

    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

/// CLI context holding the loaded tree and its configuration
pub struct CliContext {
    config: ShellConfig,
    shell: Shell,
}

impl CliContext {
    /// Load the document named by `config`, seeding it if missing.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let vfs = load_document(&config.document, config.decode_policy)?;
        Ok(Self {
            config,
            shell: Shell::new(vfs),
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Execute a non-interactive command, writing all output to `out`.
    ///
    /// `Commands::Shell` runs the banner and startup script here; the caller
    /// then hands over to [`CliContext::run_interactive`].
    pub fn execute<W: Write>(&mut self, command: &Commands, out: &mut W) -> Result<(), ShellError> {
        match command {
            Commands::Shell { .. } => {
                let script = self.config.startup_script().map(|p| p.to_path_buf());
                writeln!(out, "{}", shell::banner(&self.config.document, script.as_deref()))?;
                if let Some(script) = script {
                    self.shell.run_script(&script, out)?;
                }
            }
            Commands::Script { path } => {
                self.shell.run_script(path, out)?;
            }
            Commands::Exec { command } => {
                info!(command = ?command, "Executing one-shot command");
                match self.shell.process_line(&command.join(" ")) {
                    LineOutcome::Continue(Some(output)) => writeln!(out, "{}", output)?,
                    LineOutcome::Continue(None) | LineOutcome::Exit => {}
                }
            }
        }
        Ok(())
    }

    /// Prompt loop on the terminal.
    pub fn run_interactive(&mut self) -> Result<(), ShellError> {
        let history = if self.config.history {
            paths::history_file()
        } else {
            None
        };
        shell::run_interactive(&mut self.shell, history)
    }
}
