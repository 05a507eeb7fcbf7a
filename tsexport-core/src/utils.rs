//! Shared utility functions for code generation.

use std::path::Path;

/// Convert a PascalCase name to camelCase (e.g., "BirthDate" -> "birthDate")
///
/// Only the first character is lowered; names that are empty or already
/// start lowercase are returned unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => c.to_lowercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// Render a relative path with `/` separators regardless of the host platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("BirthDate"), "birthDate");
        assert_eq!(to_camel_case("ID"), "iD");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_forward_slashes() {
        let path: PathBuf = ["Models", "Person"].iter().collect();
        assert_eq!(to_forward_slashes(&path), "Models/Person");
        assert_eq!(to_forward_slashes(Path::new("Person")), "Person");
    }
}
