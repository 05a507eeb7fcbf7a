//! Starter tsexport.toml written by `tsexport init`.

use std::path::{Path, PathBuf};

use tsexport_core::{GeneratedFile, WritePolicy};

/// A commented starter manifest.
pub struct StarterManifest {
    pub root: String,
}

impl StarterManifest {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for StarterManifest {
    fn default() -> Self {
        Self::new("client/src/types")
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsexport.toml")
    }

    fn policy(&self) -> WritePolicy {
        WritePolicy::CreateOnly
    }

    fn render(&self) -> String {
        format!(
            r#"[output]
root = "{}"
generate_index = true

# member_naming = "annotated"   # honor ts_name, camelCase the rest
# reference_imports = true      # emit `import type` lines for referenced types
# indent = 4
# line_ending = "lf"

[[types]]
name = "Entity"
namespace = "App.Models"
export = true
abstract = true

[[types.members]]
name = "Id"
type = "Guid"

[[types]]
name = "Person"
namespace = "App.Models"
parent = "App.Models.Entity"

[[types.members]]
name = "Name"
type = "string"

[[types.members]]
name = "BirthDate"
type = "DateTime?"

[[types.members]]
name = "Tags"
type = "List<string>"
"#,
            self.root
        )
    }
}

#[cfg(test)]
mod tests {
    use tsexport_core::WriteResult;

    use super::*;
    use crate::Manifest;

    #[test]
    fn test_starter_parses() {
        let manifest: Manifest = StarterManifest::default().render().parse().unwrap();
        assert_eq!(manifest.registry().len(), 2);
        assert!(manifest.output.generate_index);
    }

    #[test]
    fn test_starter_is_created_once() {
        assert_eq!(StarterManifest::default().policy(), WritePolicy::CreateOnly);

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tsexport.toml"), "# mine\n").unwrap();

        let result = StarterManifest::new("web/types").write(dir.path()).unwrap();
        assert_eq!(result, WriteResult::Skipped);
        let content = std::fs::read_to_string(dir.path().join("tsexport.toml")).unwrap();
        assert_eq!(content, "# mine\n");
    }
}
