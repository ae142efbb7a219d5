//! Event walker dispatching markdown nodes to render callbacks.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::callbacks::{EmphasisKind, RenderCallbacks};
use crate::state::CodeBlockState;

/// Walks `pulldown-cmark` events and dispatches each node kind to a
/// [`RenderCallbacks`] implementation.
///
/// The walker frames the document with `document_header` and
/// `document_footer`, buffers code block text so callbacks receive whole
/// blocks, and reports block boundaries as separator events.
pub struct MarkdownWalker<C: RenderCallbacks> {
    callbacks: C,
    output: String,
    code: CodeBlockState,
    /// A block has closed and no separator has been reported since.
    block_closed: bool,
    /// Inline content was written and no separator has been reported since.
    inline_written: bool,
    separators: usize,
    gfm: bool,
}

impl<C: RenderCallbacks> MarkdownWalker<C> {
    /// Create a walker with GFM enabled by default.
    #[must_use]
    pub fn new(callbacks: C) -> Self {
        Self {
            callbacks,
            output: String::with_capacity(1024),
            code: CodeBlockState::default(),
            block_closed: false,
            inline_written: false,
            separators: 0,
            gfm: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(self, markdown: &str) -> String {
        let parser = self.create_parser(markdown);
        self.render(parser)
    }

    /// Walk markdown events depth-first and return the rendered output.
    pub fn render<'a, I>(mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        self.callbacks.document_header(&mut self.output);
        for event in events {
            self.process_event(event);
        }
        self.callbacks.document_footer(&mut self.output);

        tracing::debug!(
            bytes = self.output.len(),
            separators = self.separators,
            "Rendered markdown document"
        );
        self.output
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                self.inline_written = true;
                self.callbacks.text(&code, &mut self.output);
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => self.separator(),
            Event::Html(_)
            | Event::InlineHtml(_)
            | Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                tracing::trace!(?event, "Skipping unsupported event");
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::Item
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow => self.block_start(),
            Tag::TableCell => {
                if self.inline_written {
                    self.callbacks.text(" ", &mut self.output);
                }
            }
            Tag::CodeBlock(kind) => {
                self.block_start();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or_default().to_owned()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                self.code.start(lang);
            }
            Tag::Emphasis => self.emphasis(EmphasisKind::Emphasis),
            Tag::Strong => self.emphasis(EmphasisKind::Strong),
            other => tracing::trace!(tag = ?other, "Walking unsupported tag"),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.callbacks.paragraph_end(&mut self.output);
                self.block_closed = true;
            }
            TagEnd::Heading(_)
            | TagEnd::Item
            | TagEnd::Table
            | TagEnd::TableHead
            | TagEnd::TableRow => self.block_closed = true,
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                self.callbacks.block_code(&content, &lang, &mut self.output);
                self.block_closed = true;
            }
            TagEnd::Emphasis => self.emphasis(EmphasisKind::Emphasis),
            TagEnd::Strong => self.emphasis(EmphasisKind::Strong),
            other => tracing::trace!(tag = ?other, "Leaving unsupported tag"),
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else {
            self.inline_written = true;
            self.callbacks.text(text, &mut self.output);
        }
    }

    fn emphasis(&mut self, kind: EmphasisKind) {
        self.inline_written = true;
        self.callbacks.emphasis(kind, &mut self.output);
    }

    /// Report a separator when a block opens after a sibling block closed, or
    /// after inline content of an enclosing block without paragraphs (tight
    /// list items, table rows).
    fn block_start(&mut self) {
        if self.block_closed || self.inline_written {
            self.separator();
        }
    }

    fn separator(&mut self) {
        self.block_closed = false;
        self.inline_written = false;
        self.separators += 1;
        self.callbacks.separator(&mut self.output);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GodocRenderer;

    fn render_godoc(markdown: &str, package: &str, skip_first: bool) -> String {
        MarkdownWalker::new(GodocRenderer::new(package, skip_first)).render_markdown(markdown)
    }

    /// Records the callback sequence instead of formatting it.
    #[derive(Default)]
    struct RecordingCallbacks {
        calls: Vec<String>,
    }

    impl RenderCallbacks for RecordingCallbacks {
        fn document_header(&mut self, _out: &mut String) {
            self.calls.push("header".to_owned());
        }

        fn document_footer(&mut self, out: &mut String) {
            self.calls.push("footer".to_owned());
            out.push_str(&self.calls.join(","));
        }

        fn text(&mut self, text: &str, _out: &mut String) {
            self.calls.push(format!("text({text})"));
        }

        fn block_code(&mut self, code: &str, lang: &str, _out: &mut String) {
            self.calls.push(format!("code({lang}:{code})"));
        }

        fn separator(&mut self, _out: &mut String) {
            self.calls.push("sep".to_owned());
        }
    }

    fn record(markdown: &str) -> String {
        MarkdownWalker::new(RecordingCallbacks::default()).render_markdown(markdown)
    }

    #[test]
    fn test_single_text_event() {
        let events = vec![Event::Text("hello".into())];
        let walker = MarkdownWalker::new(GodocRenderer::new("mypkg", true));
        let output = walker.render(events.into_iter());
        assert_eq!(output, "// Package mypkg is the hello\npackage mypkg\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render_godoc("", "empty", false), "// Package empty is the \npackage empty\n");
    }

    #[test]
    fn test_mixed_messages() {
        let markdown = "This thing happens\n**after** a Code `Block`";
        assert_eq!(
            render_godoc(markdown, "anything", false),
            "// Package anything is the This thing happens\n// **after** a Code Block\n//\n//\npackage anything\n"
        );
    }

    #[test]
    fn test_mixed_messages_skip_first_separator() {
        let markdown = "This thing happens\n**after** a Code `Block`";
        assert_eq!(
            render_godoc(markdown, "anything", true),
            "// Package anything is the This thing happens**after** a Code Block\n//\n//\npackage anything\n"
        );
    }

    #[test]
    fn test_two_paragraphs() {
        assert_eq!(
            render_godoc("first.\n\nSecond one.", "two", false),
            "// Package two is the first.\n//\n//\n// Second one.\n//\n//\npackage two\n"
        );
    }

    #[test]
    fn test_paragraph_then_code_block() {
        let markdown = "widget toolkit.\n\n```go\nw := widget.New()\nw.Run()\n```\n";
        assert_eq!(
            render_godoc(markdown, "widget", true),
            "// Package widget is the widget toolkit.\n//\n//  w := widget.New()\n//  w.Run()\n//\n//\npackage widget\n"
        );
    }

    #[test]
    fn test_indented_code_block() {
        assert_eq!(
            record("intro\n\n    x := 1\n"),
            "header,text(intro),sep,code(:x := 1),footer"
        );
    }

    #[test]
    fn test_fence_info_keeps_first_word() {
        assert_eq!(
            record("```go title=main.go\nfunc main() {}\n```"),
            "header,code(go:func main() {}),footer"
        );
    }

    #[test]
    fn test_code_block_text_not_sent_to_text_callback() {
        let output = record("```\n**not bold**\n```");
        assert_eq!(output, "header,code(:**not bold**),footer");
    }

    #[test]
    fn test_heading_is_a_block() {
        assert_eq!(
            record("# Title\n\nBody"),
            "header,text(Title),sep,text(Body),footer"
        );
    }

    #[test]
    fn test_unsupported_nodes_walk_children() {
        assert_eq!(
            render_godoc("See [the docs](https://example.com).", "x", false),
            "// Package x is the See the docs.\n//\n//\npackage x\n"
        );
    }

    #[test]
    fn test_list_items_are_separated() {
        assert_eq!(
            record("- one\n- two"),
            "header,text(one),sep,text(two),footer"
        );
    }

    #[test]
    fn test_tight_list_item_then_code_block() {
        let markdown = "- a\n  ```\n  x := 1\n  ```";
        assert_eq!(record(markdown), "header,text(a),sep,code(:x := 1),footer");
        assert_eq!(
            render_godoc(markdown, "x", false),
            "// Package x is the a\n//   x := 1\n//\n//\npackage x\n"
        );
    }

    #[test]
    fn test_nested_tight_list_items() {
        assert_eq!(record("- a\n  - b"), "header,text(a),sep,text(b),footer");
        assert_eq!(
            render_godoc("- a\n  - b", "x", false),
            "// Package x is the a\n// b\npackage x\n"
        );
    }

    #[test]
    fn test_loose_list_item_paragraph_not_separated_twice() {
        assert_eq!(
            record("- one\n\n- two"),
            "header,text(one),sep,text(two),footer"
        );
    }

    #[test]
    fn test_table_rows_and_cells() {
        assert_eq!(
            render_godoc("intro\n\n| a | b |\n|---|---|\n| 1 | 2 |", "x", false),
            "// Package x is the intro\n//\n//\n// a b\n// 1 2\npackage x\n"
        );
    }

    #[test]
    fn test_code_block_keeps_trailing_blank_line() {
        assert_eq!(record("```\na\n\n```"), "header,code(:a\n),footer");
    }

    #[test]
    fn test_html_is_skipped() {
        assert_eq!(
            render_godoc("a <b>bold</b> word", "x", false),
            "// Package x is the a bold word\n//\n//\npackage x\n"
        );
    }

    #[test]
    fn test_hard_break_is_separator() {
        assert_eq!(record("one  \ntwo"), "header,text(one),sep,text(two),footer");
    }

    #[test]
    fn test_leading_rule_is_separator() {
        assert_eq!(record("---\n\nbody"), "header,sep,text(body),footer");
        assert_eq!(
            render_godoc("---\n\nbody", "x", false),
            "// Package x is the \n// body\n//\n//\npackage x\n"
        );
        assert_eq!(
            render_godoc("---\n\nbody", "x", true),
            "// Package x is the body\n//\n//\npackage x\n"
        );
    }

    #[test]
    fn test_strikethrough_markers_dropped_with_gfm() {
        assert_eq!(
            render_godoc("~~gone~~", "x", false),
            "// Package x is the gone\n//\n//\npackage x\n"
        );
    }

    #[test]
    fn test_gfm_disabled() {
        let output = MarkdownWalker::new(GodocRenderer::new("x", false))
            .with_gfm(false)
            .render_markdown("~~gone~~");
        assert_eq!(output, "// Package x is the ~~gone~~\n//\n//\npackage x\n");
    }

    #[test]
    fn test_parser_options_with_gfm() {
        let walker = MarkdownWalker::new(GodocRenderer::new("x", false));
        let options = walker.parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
        assert!(options.contains(Options::ENABLE_GFM));
    }

    #[test]
    fn test_parser_options_without_gfm() {
        let walker = MarkdownWalker::new(GodocRenderer::new("x", false)).with_gfm(false);
        assert!(walker.parser_options().is_empty());
    }
}
