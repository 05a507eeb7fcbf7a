use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use tsexport_core::{File, GeneratedFile, WritePolicy, WriteResult};
use tsexport_manifest::StarterManifest;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write tsexport.toml into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Output root written into the starter manifest
    #[arg(short, long, default_value = "client/src/types")]
    pub root: String,

    /// Overwrite an existing tsexport.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let starter = StarterManifest::new(&self.root);
        let path = starter.path(&self.dir);

        let policy = if self.force {
            WritePolicy::Replace
        } else {
            starter.policy()
        };
        let result = File::new(path.clone(), starter.render())
            .with_policy(policy)
            .write()
            .wrap_err("Failed to write starter manifest")?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit the [[types]] entries, then run");
                println!("  tsexport generate{}", Self::config_arg(&self.dir));
            }
            WriteResult::Skipped => {
                eprintln!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
                std::process::exit(1);
            }
        }

        Ok(())
    }

    fn config_arg(dir: &Path) -> String {
        if dir == Path::new(".") {
            String::new()
        } else {
            format!(" -c {}", dir.join("tsexport.toml").display())
        }
    }
}
