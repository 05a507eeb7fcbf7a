use clap::Args;
use eyre::{Context, Result};

use super::ManifestArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.open();
        let report = ops::list(file.manifest());

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize type list")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
