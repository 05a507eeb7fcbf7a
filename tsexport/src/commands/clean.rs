use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ManifestArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Output root (defaults to `output.root` from the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.open();
        let manifest = file.manifest();
        let output_dir = self.output.as_ref().unwrap_or(&manifest.output.root);

        let report = ops::clean(
            manifest,
            ops::clean::CleanOptions {
                output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
