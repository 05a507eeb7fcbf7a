//! Output folder and file path for each emitted type.

use std::path::PathBuf;

use tsexport_ir::TypeDef;

/// Where one declaration is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Folder below the output root; empty for the root itself
    pub folder: String,
    /// Path relative to the output root, `/`-separated (`Models/Person.ts`)
    pub relative: String,
    /// Full path on disk
    pub path: PathBuf,
}

impl Location {
    /// Relative path without the extension, as used in module specifiers.
    pub fn module_path(&self) -> &str {
        match self.relative.rfind('.') {
            Some(dot) if !self.relative[dot..].contains('/') => &self.relative[..dot],
            _ => &self.relative,
        }
    }
}

/// Plans locations under one output root.
#[derive(Debug, Clone)]
pub struct OutputPlanner {
    root: PathBuf,
    extension: &'static str,
}

impl OutputPlanner {
    pub fn new(root: impl Into<PathBuf>, extension: &'static str) -> Self {
        Self {
            root: root.into(),
            extension,
        }
    }

    /// Folder annotation if present, else inferred from the namespace;
    /// file named after the export name.
    ///
    /// Annotated folders may use either separator; the planned folder and
    /// relative path always use `/`.
    pub fn plan_location(&self, def: &TypeDef, export_name: &str) -> Location {
        let segments: Vec<&str> = match &def.folder {
            Some(annotation) => annotation
                .folder
                .split(['/', '\\'])
                .filter(|segment| !segment.is_empty())
                .collect(),
            None => Some(infer_folder(&def.namespace))
                .filter(|folder| !folder.is_empty())
                .into_iter()
                .collect(),
        };
        let file_name = format!("{}.{}", export_name, self.extension);

        let folder = segments.join("/");
        let relative = if folder.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", folder, file_name)
        };
        let path = segments
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment))
            .join(&file_name);

        Location {
            folder,
            relative,
            path,
        }
    }
}

/// The last dot-separated namespace segment (`App.Models` -> `Models`).
/// An empty namespace maps to the output root.
pub fn infer_folder(namespace: &str) -> &str {
    namespace.rsplit('.').next().unwrap_or_default()
}

/// Module specifier for importing `target` (a module path relative to the
/// output root) from a file in `from_folder`.
///
/// ```
/// use tsexport_codegen::generation::relative_module_path;
///
/// assert_eq!(relative_module_path("Models", "Models/Address"), "./Address");
/// assert_eq!(relative_module_path("Models", "Shared/Address"), "../Shared/Address");
/// assert_eq!(relative_module_path("", "Shared/Address"), "./Shared/Address");
/// ```
pub fn relative_module_path(from_folder: &str, target: &str) -> String {
    let from: Vec<&str> = from_folder.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();

    // The last segment of `to` is the file; only folders take part in the prefix.
    let to_dirs = &to[..to.len().saturating_sub(1)];
    let common = from
        .iter()
        .zip(to_dirs)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; from.len() - common];
    segments.extend(&to[common..]);

    let joined = segments.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn planner() -> OutputPlanner {
        OutputPlanner::new("out", "ts")
    }

    #[test]
    fn test_infer_folder() {
        assert_eq!(infer_folder("App.Models"), "Models");
        assert_eq!(infer_folder("App.Api.V2.Dto"), "Dto");
        assert_eq!(infer_folder("Models"), "Models");
        assert_eq!(infer_folder(""), "");
        assert_eq!(infer_folder("App. Models"), " Models");
    }

    #[test]
    fn test_plan_from_namespace() {
        let def = TypeDef::new("App.Models", "Person");
        let location = planner().plan_location(&def, "Person");

        assert_eq!(location.folder, "Models");
        assert_eq!(location.relative, "Models/Person.ts");
        assert_eq!(location.path, Path::new("out").join("Models").join("Person.ts"));
        assert_eq!(location.module_path(), "Models/Person");
    }

    #[test]
    fn test_plan_folder_annotation_is_literal() {
        let def = TypeDef::new("App.Models", "Person").in_folder("people/v2");
        let location = planner().plan_location(&def, "PersonDto");

        assert_eq!(location.folder, "people/v2");
        assert_eq!(location.relative, "people/v2/PersonDto.ts");
    }

    #[test]
    fn test_plan_backslash_folder_uses_forward_slashes() {
        let def = TypeDef::new("App", "Person").in_folder("Admin\\Users");
        let location = planner().plan_location(&def, "Person");

        assert_eq!(location.folder, "Admin/Users");
        assert_eq!(location.relative, "Admin/Users/Person.ts");
        assert_eq!(location.module_path(), "Admin/Users/Person");
        assert_eq!(
            location.path,
            Path::new("out").join("Admin").join("Users").join("Person.ts")
        );
    }

    #[test]
    fn test_plan_empty_namespace_goes_to_root() {
        let def = TypeDef::new("", "Person");
        let location = planner().plan_location(&def, "Person");

        assert_eq!(location.folder, "");
        assert_eq!(location.relative, "Person.ts");
        assert_eq!(location.path, Path::new("out").join("Person.ts"));
    }

    #[test]
    fn test_relative_module_path() {
        assert_eq!(relative_module_path("Models", "Models/Address"), "./Address");
        assert_eq!(relative_module_path("Models", "Address"), "../Address");
        assert_eq!(relative_module_path("a/b", "a/c/Address"), "../c/Address");
        assert_eq!(relative_module_path("a/b", "a/b/Address"), "./Address");
        assert_eq!(relative_module_path("", "Address"), "./Address");
    }
}
