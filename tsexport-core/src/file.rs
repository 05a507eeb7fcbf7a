//! Writing generated files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// What to do when the target already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Generated output, rewritten every run
    #[default]
    Replace,
    /// User-owned files such as the starter manifest
    CreateOnly,
}

impl WritePolicy {
    /// Write `content` to `path`, creating parent directories.
    pub fn write(self, path: &Path, content: &str) -> Result<WriteResult> {
        if self == WritePolicy::CreateOnly && path.exists() {
            return Ok(WriteResult::Skipped);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(WriteResult::Written)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file existed and the policy kept it.
    Skipped,
}

/// A file whose location is derived from an output root.
pub trait GeneratedFile {
    fn path(&self, base: &Path) -> PathBuf;

    fn render(&self) -> String;

    fn policy(&self) -> WritePolicy {
        WritePolicy::Replace
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.policy().write(&self.path(base), &self.render())
    }
}

/// Content already bound to a concrete path.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    policy: WritePolicy,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: WritePolicy::Replace,
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn write(&self) -> Result<WriteResult> {
        self.policy.write(&self.path, &self.content)
    }
}
