//! Clears previously generated files from an output root.
//!
//! Every file with the generated extension is deleted, anywhere below the
//! root; directories left empty are then removed bottom-up. Files with
//! other extensions, and the root itself, are never touched.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tracing::debug;
use tsexport_core::to_forward_slashes;

use crate::language::CleanResult;

#[derive(Debug, Clone)]
pub struct Synchronizer {
    root: PathBuf,
    extension: &'static str,
}

impl Synchronizer {
    pub fn new(root: impl Into<PathBuf>, extension: &'static str) -> Self {
        Self {
            root: root.into(),
            extension,
        }
    }

    /// Delete generated files and empty folders. A missing root is created.
    pub fn clear(&self) -> Result<CleanResult> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .wrap_err_with(|| format!("failed to create '{}'", self.root.display()))?;
            debug!(root = %self.root.display(), "created output root");
            return Ok(CleanResult {
                created_root: true,
                ..Default::default()
            });
        }

        let mut result = CleanResult::default();
        self.walk(&self.root, false, &mut result)?;
        Ok(result)
    }

    /// What [`Synchronizer::clear`] would remove, without touching disk.
    pub fn plan_clear(&self) -> Result<CleanResult> {
        if !self.root.exists() {
            return Ok(CleanResult {
                created_root: true,
                ..Default::default()
            });
        }

        let mut result = CleanResult::default();
        self.walk(&self.root, true, &mut result)?;
        Ok(result)
    }

    /// Process `dir` and report whether it is empty afterwards.
    fn walk(&self, dir: &Path, dry_run: bool, result: &mut CleanResult) -> Result<bool> {
        let mut entries = fs::read_dir(dir)
            .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
            .collect::<std::io::Result<Vec<_>>>()
            .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut remaining = 0;
        for entry in entries {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .wrap_err_with(|| format!("failed to inspect '{}'", path.display()))?;

            if file_type.is_dir() {
                if self.walk(&path, dry_run, result)? {
                    if !dry_run {
                        fs::remove_dir(&path)
                            .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
                    }
                    debug!(dir = %path.display(), "removed empty directory");
                    result.removed_dirs.push(self.display(&path));
                } else {
                    remaining += 1;
                }
            } else if path.extension() == Some(OsStr::new(self.extension)) {
                if !dry_run {
                    fs::remove_file(&path)
                        .wrap_err_with(|| format!("failed to delete '{}'", path.display()))?;
                }
                debug!(file = %path.display(), "deleted generated file");
                result.deleted_files.push(self.display(&path));
            } else {
                remaining += 1;
            }
        }

        Ok(remaining == 0)
    }

    fn display(&self, path: &Path) -> String {
        to_forward_slashes(path.strip_prefix(&self.root).unwrap_or(path))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_missing_root_is_created() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("types");

        let result = Synchronizer::new(&root, "ts").clear().unwrap();
        assert!(result.created_root);
        assert!(root.is_dir());
    }

    #[test]
    fn test_clear_deletes_generated_files_and_empty_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "index.ts");
        touch(root, "Models/Person.ts");
        touch(root, "Models/Nested/Order.ts");
        touch(root, "Shared/Address.ts");
        touch(root, "Shared/README.md");

        let result = Synchronizer::new(root, "ts").clear().unwrap();

        assert_eq!(
            result.deleted_files,
            vec![
                "Models/Nested/Order.ts",
                "Models/Person.ts",
                "Shared/Address.ts",
                "index.ts"
            ]
        );
        assert_eq!(result.removed_dirs, vec!["Models/Nested", "Models"]);
        assert!(!root.join("Models").exists());
        assert!(root.join("Shared/README.md").exists());
        assert!(root.is_dir());
    }

    #[test]
    fn test_preexisting_empty_dirs_are_removed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Old/Deeper")).unwrap();

        let result = Synchronizer::new(temp.path(), "ts").clear().unwrap();
        assert_eq!(result.removed_dirs, vec!["Old/Deeper", "Old"]);
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_plan_clear_touches_nothing() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Models/Person.ts");

        let sync = Synchronizer::new(temp.path(), "ts");
        let planned = sync.plan_clear().unwrap();
        assert!(temp.path().join("Models/Person.ts").exists());

        let actual = sync.clear().unwrap();
        assert_eq!(planned, actual);
    }

    #[test]
    fn test_other_extensions_untouched() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Models/Person.tsx");
        touch(temp.path(), "Models/Person.js");

        let result = Synchronizer::new(temp.path(), "ts").clear().unwrap();
        assert!(result.is_empty());
        assert!(temp.path().join("Models/Person.tsx").exists());
    }
}
