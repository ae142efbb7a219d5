//! Render state shared between the walker and the Go doc callbacks.

/// One-shot state of the first-separator suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorState {
    /// No separator event has been seen yet.
    #[default]
    Pending,
    /// At least one separator event has been seen.
    Separated,
}

impl SeparatorState {
    /// Record a separator event and report whether it should be written.
    ///
    /// Only the first event can be suppressed, and only when `skip_first` is set.
    pub(crate) fn advance(&mut self, skip_first: bool) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Separated;
                !skip_first
            }
            Self::Separated => true,
        }
    }
}

/// Code block content collected between `Start(CodeBlock)` and `End(CodeBlock)`.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockState {
    lang: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn is_active(&self) -> bool {
        self.lang.is_some()
    }

    pub(crate) fn start(&mut self, lang: String) {
        self.lang = Some(lang);
        self.buffer.clear();
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Finish the block, returning its language and content.
    ///
    /// The parser terminates every code line with `\n`; the final one is
    /// dropped so the content holds lines rather than line-terminated lines.
    pub(crate) fn end(&mut self) -> (String, String) {
        let lang = self.lang.take().unwrap_or_default();
        let mut content = std::mem::take(&mut self.buffer);
        if content.ends_with('\n') {
            content.pop();
        }
        (lang, content)
    }
}
