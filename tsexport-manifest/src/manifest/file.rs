use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a tsexport.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a tsexport.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsexport.toml");
        let content = "[output]\nroot = \"out\"\n";
        std::fs::write(&path, content).unwrap();

        let file = ManifestFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.content(), content);
        assert_eq!(file.manifest().output.root, Path::new("out"));
    }

    #[test]
    fn test_open_reports_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[output\n").unwrap();

        let err = ManifestFile::open(&path).unwrap_err();
        let crate::Error::Parse { src, .. } = *err else {
            panic!("expected a parse error");
        };
        assert_eq!(src.name(), path.display().to_string());
    }
}
