mod check;
mod clean;
mod completions;
mod generate;
mod init;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use tsexport_manifest::ManifestFile;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tsexport_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// `-c/--config`, shared by every command that reads a manifest.
#[derive(Args)]
pub(crate) struct ManifestArgs {
    /// Path to the manifest
    #[arg(short, long, default_value = "tsexport.toml")]
    config: PathBuf,
}

impl ManifestArgs {
    /// Load and validate the manifest, exiting with a diagnostic on failure.
    pub fn open(&self) -> ManifestFile {
        ManifestFile::open(&self.config).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "tsexport")]
#[command(version)]
#[command(about = "Generate TypeScript interfaces from tsexport.toml type metadata")]
pub(crate) struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter tsexport.toml
    Init(InitCommand),

    /// Clear the output root and write one declaration per exported type
    Generate(GenerateCommand),

    /// Validate tsexport.toml without generating anything
    Check(CheckCommand),

    /// List the types that would be exported
    List(ListCommand),

    /// Delete generated .ts files and the folders they leave empty
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
