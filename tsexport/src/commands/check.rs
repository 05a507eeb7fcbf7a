use clap::Args;
use eyre::Result;

use super::ManifestArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    manifest: ManifestArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.open();

        let report = ops::check(file.manifest(), file.path());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
