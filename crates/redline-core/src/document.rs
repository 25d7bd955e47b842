//! Line-oriented view of a text document.
//!
//! All comparison code operates on lines. A `Document` is derived by
//! normalizing CRLF to LF and splitting on `\n`; normalization never alters
//! content mid-line. Splitting follows the convention of the frontends this
//! engine serves: empty text is a document with a single empty line.

use std::borrow::Cow;

/// Normalize CRLF line endings to LF. Lone `\r` characters are left alone.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// An ordered sequence of lines derived from a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines after normalizing line endings.
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize_line_endings(text);
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Join the lines back into text with LF line endings.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_normalized_to_lf() {
        let doc = Document::from_text("a\r\nb\r\nc");
        assert_eq!(doc.lines(), &["a", "b", "c"]);
        assert_eq!(doc.to_text(), "a\nb\nc");
    }

    #[test]
    fn test_normalization_never_touches_mid_line_content() {
        let doc = Document::from_text("tab\there\nlone\rcarriage");
        assert_eq!(doc.lines(), &["tab\there", "lone\rcarriage"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let doc = Document::from_text("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.lines(), &[""]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty_line() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.lines(), &["a", "b", ""]);
    }

    #[test]
    fn test_round_trip() {
        let text = "fn main() {\n    println!(\"hi\");\n}";
        assert_eq!(Document::from_text(text).to_text(), text);
    }
}
