use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ManifestArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Output root (defaults to `output.root` from the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write index.ts regardless of the manifest
    #[arg(long, conflicts_with = "no_index")]
    pub index: bool,

    /// Skip index.ts regardless of the manifest
    #[arg(long)]
    pub no_index: bool,

    /// Preview generated files without touching disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.open();
        let manifest = file.manifest();
        let output_dir = self.output.as_ref().unwrap_or(&manifest.output.root);

        let report = ops::generate(
            manifest,
            ops::generate::GenerateOptions {
                output_dir,
                index: self.index_override(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn index_override(&self) -> Option<bool> {
        match (self.index, self.no_index) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
