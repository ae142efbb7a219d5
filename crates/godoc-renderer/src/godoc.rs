//! Go package documentation callbacks.
//!
//! Produces a `//` line comment block suitable for a `doc.go` file, followed
//! by the package clause.

use std::fmt::Write;

use crate::callbacks::{EmphasisKind, RenderCallbacks};
use crate::state::SeparatorState;

/// Starts a new comment line mid-paragraph or between blocks.
const SEPARATOR: &str = "\n// ";

/// Closes a block with an empty comment line, leaving the cursor on a bare `//`.
const BLOCK_TERMINATOR: &str = "\n//\n//";

/// Go doc comment callbacks.
///
/// Writes:
/// - `// Package <name> is the ` as the opening sentence
/// - Text verbatim, continuing that sentence
/// - Code blocks indented by two spaces, as `go doc` expects
/// - `package <name>` after the comment
#[derive(Debug)]
pub struct GodocRenderer {
    package: String,
    skip_first_separator: bool,
    separator: SeparatorState,
}

impl GodocRenderer {
    /// Create callbacks for the given Go package.
    ///
    /// When `skip_first_separator` is set, the first separator event writes
    /// nothing, so the opening sentence is not followed by an empty comment
    /// line.
    pub fn new(package: impl Into<String>, skip_first_separator: bool) -> Self {
        Self {
            package: package.into(),
            skip_first_separator,
            separator: SeparatorState::Pending,
        }
    }

    /// Go package name written in the header and package clause.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Whether the first separator event is suppressed.
    #[must_use]
    pub fn skips_first_separator(&self) -> bool {
        self.skip_first_separator
    }

    /// Current state of first-separator suppression.
    ///
    /// `Separated` once any separator event has been seen, written or not.
    #[must_use]
    pub fn separator_state(&self) -> SeparatorState {
        self.separator
    }
}

impl RenderCallbacks for GodocRenderer {
    fn document_header(&mut self, out: &mut String) {
        write!(out, "// Package {} is the ", self.package).unwrap();
    }

    fn document_footer(&mut self, out: &mut String) {
        write!(out, "\npackage {}\n", self.package).unwrap();
    }

    fn text(&mut self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn block_code(&mut self, code: &str, _lang: &str, out: &mut String) {
        if !code.is_empty() {
            for (i, line) in code.split('\n').enumerate() {
                if i > 0 {
                    out.push_str("\n//");
                }
                out.push_str("  ");
                out.push_str(line.strip_suffix('\r').unwrap_or(line));
            }
        }
        out.push_str(BLOCK_TERMINATOR);
    }

    fn separator(&mut self, out: &mut String) {
        if self.separator.advance(self.skip_first_separator) {
            out.push_str(SEPARATOR);
        }
    }

    fn paragraph_end(&mut self, out: &mut String) {
        out.push_str(BLOCK_TERMINATOR);
    }

    fn emphasis(&mut self, kind: EmphasisKind, out: &mut String) {
        out.push_str(kind.delimiter());
    }
}
