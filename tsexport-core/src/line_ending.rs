//! Line terminator selection for generated files.

use std::fmt;

use serde::Deserialize;

/// Line terminator written into generated files.
///
/// Code is always built with `\n`; [`LineEnding::apply`] converts the
/// finished text right before it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The host platform's terminator (`\r\n` on Windows, `\n` elsewhere).
    #[default]
    Native,
    /// Unix line feed.
    Lf,
    /// Windows carriage return + line feed.
    Crlf,
}

impl LineEnding {
    /// The terminator this setting resolves to on the current host.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Rewrite `\n`-terminated text to use this terminator.
    pub fn apply(&self, text: &str) -> String {
        match self.as_str() {
            "\n" => text.to_string(),
            terminator => text.replace('\n', terminator),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Native => "native",
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
        };
        f.write_str(name)
    }
}
