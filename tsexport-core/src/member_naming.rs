//! Member naming policy for emitted interfaces.

use std::fmt;

use serde::Deserialize;

/// Which name a member line is written under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberNaming {
    /// The member's declared name, ignoring any annotation override.
    #[default]
    Declared,
    /// The annotation's name when present, else the camelCase declared name.
    Annotated,
}

impl fmt::Display for MemberNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemberNaming::Declared => "declared",
            MemberNaming::Annotated => "annotated",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_declared() {
        assert_eq!(MemberNaming::default(), MemberNaming::Declared);
    }

    #[test]
    fn test_display_matches_manifest_spelling() {
        assert_eq!(MemberNaming::Annotated.to_string(), "annotated");
    }
}
