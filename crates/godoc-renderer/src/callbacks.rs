//! Callback trait implemented by output formats.

/// Inline emphasis flavour, as reported by the walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmphasisKind {
    /// `*text*`
    Emphasis,
    /// `**text**`
    Strong,
}

impl EmphasisKind {
    /// Markdown delimiter for this emphasis kind.
    #[must_use]
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Emphasis => "*",
            Self::Strong => "**",
        }
    }
}

/// Per-node-kind callbacks invoked by [`MarkdownWalker`](crate::MarkdownWalker).
///
/// Callbacks are called in document order on the calling thread and only ever
/// append to `out`. Node kinds without a callback here are walked for their
/// children but produce no output of their own.
///
/// The required methods cover the constructs every output format must decide
/// on; the provided methods default to writing nothing.
pub trait RenderCallbacks {
    /// Called once before any content callback.
    fn document_header(&mut self, out: &mut String);

    /// Called once after all content callbacks.
    fn document_footer(&mut self, out: &mut String);

    /// Literal text outside code blocks, including inline code span content.
    fn text(&mut self, text: &str, out: &mut String);

    /// A complete fenced or indented code block.
    ///
    /// `lang` is the first word of the fence info string, empty when absent.
    fn block_code(&mut self, code: &str, lang: &str, out: &mut String);

    /// A boundary between two sibling blocks, or a line break inside one.
    fn separator(&mut self, out: &mut String);

    /// End of a paragraph.
    fn paragraph_end(&mut self, _out: &mut String) {}

    /// Opening or closing delimiter of an emphasis span.
    fn emphasis(&mut self, _kind: EmphasisKind, _out: &mut String) {}
}
