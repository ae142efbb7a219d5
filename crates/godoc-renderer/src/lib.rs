//! Markdown renderer producing Go package documentation comments.
//!
//! This crate provides a generic [`MarkdownWalker`] that walks
//! `pulldown-cmark` events and dispatches each node kind to a
//! [`RenderCallbacks`] implementation.
//!
//! # Architecture
//!
//! The walker owns traversal state (code block buffering, block boundaries)
//! and the parser options. Everything format-specific is delegated to the
//! callbacks:
//! - [`GodocRenderer`]: Writes a `// Package x is the ...` comment block
//!   followed by a `package x` declaration
//!
//! # Example
//!
//! ```
//! use godoc_renderer::{GodocRenderer, MarkdownWalker};
//!
//! let output = MarkdownWalker::new(GodocRenderer::new("widgets", false))
//!     .render_markdown("best widget library.");
//! assert_eq!(
//!     output,
//!     "// Package widgets is the best widget library.\n//\n//\npackage widgets\n"
//! );
//! ```

mod callbacks;
mod godoc;
mod state;
mod walker;

pub use callbacks::{EmphasisKind, RenderCallbacks};
pub use godoc::GodocRenderer;
pub use state::SeparatorState;
pub use walker::MarkdownWalker;
