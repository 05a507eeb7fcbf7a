//! Indentation of generated declarations.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Clamped to 1..=8.
    Spaces(u8),
}

const SPACES: &str = "        ";

impl Indent {
    /// 4-space indentation, the default for emitted declarations.
    pub const DEFAULT: Self = Self::Spaces(4);

    /// 2-space indentation (common TypeScript formatter setting).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// One indentation level.
    pub fn as_str(&self) -> &'static str {
        let Self::Spaces(n) = self;
        &SPACES[..usize::from((*n).clamp(1, 8))]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
    }

    #[test]
    fn test_indent_is_clamped() {
        assert_eq!(Indent::Spaces(0).as_str(), " ");
        assert_eq!(Indent::Spaces(12).as_str(), "        ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
