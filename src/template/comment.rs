//! Wraps text in the comment syntax of a filetype.

use crate::constants::fallback_comment;

/// Comment delimiters of a filetype. Empty strings are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSyntax {
    open: Option<String>,
    close: Option<String>,
}

/// How a block of text gets commented, derived from [`CommentSyntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle<'a> {
    /// Framed by `open` and `close` lines.
    Block { open: &'a str, close: &'a str },
    /// Every line starts with `prefix`; no frame.
    Line { prefix: &'a str },
}

impl CommentSyntax {
    pub fn new<S: Into<String>>(open: Option<S>, close: Option<S>) -> Self {
        let non_empty = |s: Option<S>| s.map(Into::into).filter(|s: &String| !s.is_empty());
        Self { open: non_empty(open), close: non_empty(close) }
    }

    pub fn open(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn close(&self) -> Option<&str> {
        self.close.as_deref()
    }

    /// A close delimiter without an open one counts as no syntax at all and
    /// falls back to C block comments.
    pub fn style(&self) -> CommentStyle<'_> {
        match (self.open(), self.close()) {
            (Some(open), Some(close)) => CommentStyle::Block { open, close },
            (Some(prefix), None) => CommentStyle::Line { prefix },
            _ => CommentStyle::Block {
                open: fallback_comment::OPEN,
                close: fallback_comment::CLOSE,
            },
        }
    }
}

/// Turns `text` into a comment block for `syntax`.
///
/// `indent` is the whole width in front of each line's content, comment
/// characters included: at `indent = 8` a C block line reads
/// ` *      text`. Prefixes longer than `indent` are never shortened.
///
/// Block comments whose frame start has `*` as second character (`/*`,
/// `(*`) get the Javadoc look: ` *` line prefixes and a space before the
/// closing delimiter.
pub fn make_comment_block(text: &str, syntax: &CommentSyntax, indent: usize) -> String {
    let (frame_start, mut frame_end, mut line_prefix) = match syntax.style() {
        CommentStyle::Block { open, close } => {
            (Some(format!("{open}\n")), format!("{close}\n"), "")
        }
        CommentStyle::Line { prefix } => (None, String::new(), prefix),
    };

    if let Some(start) = &frame_start {
        if start.as_bytes().get(1) == Some(&b'*') {
            frame_end.insert(0, ' ');
            line_prefix = " *";
        }
    }

    let prefix = format!("{line_prefix:<indent$}");

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let last = lines.len() - 1;
    for (i, line) in lines.iter_mut().enumerate() {
        if i == last && line.is_empty() {
            continue;
        }
        line.insert_str(0, &prefix);
    }
    let body = lines.join("\n");

    let mut result = frame_start.unwrap_or_default();
    result.push_str(&body);
    result.push_str(&frame_end);
    result
}
