use indexmap::IndexMap;

/// Folder name -> files generated into it during one run.
///
/// Folders iterate in first-insertion order, files in emission order.
/// Paths are relative to the output root and use `/` separators.
#[derive(Debug, Clone, Default)]
pub struct FolderMap {
    folders: IndexMap<String, Vec<String>>,
}

impl FolderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file. A path already recorded for the folder is not added twice.
    pub fn insert(&mut self, folder: impl Into<String>, path: impl Into<String>) {
        let files = self.folders.entry(folder.into()).or_default();
        let path = path.into();
        if !files.contains(&path) {
            files.push(path);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.folders
            .iter()
            .map(|(folder, files)| (folder.as_str(), files.as_slice()))
    }

    /// All recorded files, folder by folder.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.folders.values().flatten().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}
