//! Splicing a sub-range replacement back into a full document.

use redline_core::{Document, Result, Selection};

/// Extract the text a selection covers, joined with LF.
pub fn selected_text(full_text: &str, selection: &Selection) -> Result<String> {
    let document = Document::from_text(full_text);
    selection.validate(document.line_count())?;
    Ok(document.lines()[selection.start_line - 1..selection.end_line].join("\n"))
}

/// Replace the selected line range of `full_text` with `replacement`.
///
/// Everything outside the selection is preserved exactly. The selection is
/// validated against the document's line count; out-of-range or inverted
/// bounds are an input error, never silently clamped. Splicing a selection
/// with its own original text returns the document unchanged.
pub fn splice(full_text: &str, selection: &Selection, replacement: &str) -> Result<String> {
    let document = Document::from_text(full_text);
    selection.validate(document.line_count())?;

    let lines = document.lines();
    let prefix = lines[..selection.start_line - 1].join("\n");
    let suffix = lines[selection.end_line..].join("\n");

    let mut result =
        String::with_capacity(prefix.len() + replacement.len() + suffix.len() + 2);
    result.push_str(&prefix);
    if !prefix.is_empty() {
        result.push('\n');
    }
    result.push_str(replacement);
    if !suffix.is_empty() {
        result.push('\n');
    }
    result.push_str(&suffix);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_core::RedlineError;

    #[test]
    fn test_splice_middle_line() {
        // Scenario: replace line 2 of 3.
        let result = splice("L1\nL2\nL3", &Selection::new(2, 2), "X2").unwrap();
        assert_eq!(result, "L1\nX2\nL3");
    }

    #[test]
    fn test_splice_whole_document_reduces_to_replacement() {
        let full = "a\nb\nc\nd\ne";
        let result = splice(full, &Selection::new(1, 5), "new").unwrap();
        assert_eq!(result, "new");
    }

    #[test]
    fn test_splice_first_line_has_empty_prefix() {
        let result = splice("a\nb\nc", &Selection::new(1, 1), "x").unwrap();
        assert_eq!(result, "x\nb\nc");
    }

    #[test]
    fn test_splice_last_line_has_empty_suffix() {
        let result = splice("a\nb\nc", &Selection::new(3, 3), "x").unwrap();
        assert_eq!(result, "a\nb\nx");
    }

    #[test]
    fn test_splice_multi_line_replacement() {
        let result = splice("a\nb\nc\nd", &Selection::new(2, 3), "x\ny\nz").unwrap();
        assert_eq!(result, "a\nx\ny\nz\nd");
    }

    #[test]
    fn test_invalid_selection_is_an_error() {
        assert!(matches!(
            splice("a\nb", &Selection::new(1, 3), "x"),
            Err(RedlineError::Input(_))
        ));
        assert!(matches!(
            splice("a\nb", &Selection::new(2, 1), "x"),
            Err(RedlineError::Input(_))
        ));
    }

    #[test]
    fn test_selected_text_extracts_range() {
        assert_eq!(
            selected_text("a\nb\nc\nd", &Selection::new(2, 3)).unwrap(),
            "b\nc"
        );
    }

    #[test]
    fn test_splicing_original_text_is_identity() {
        let full = "a\nb\nc\nd\ne";
        let sel = Selection::new(2, 4);
        let original = selected_text(full, &sel).unwrap();
        assert_eq!(splice(full, &sel, &original).unwrap(), full);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_doc_and_selection() -> impl Strategy<Value = (Vec<String>, Selection)> {
            proptest::collection::vec("[a-z]{0,8}", 1..24).prop_flat_map(|lines| {
                let count = lines.len();
                (Just(lines), 1..=count).prop_flat_map(move |(lines, start)| {
                    (Just(lines), Just(start), start..=count)
                        .prop_map(|(lines, start, end)| (lines, Selection::new(start, end)))
                })
            })
        }

        proptest! {
            /// Splicing a selection with its own text is the identity.
            #[test]
            fn prop_splice_is_idempotent((lines, sel) in arb_doc_and_selection()) {
                let full = lines.join("\n");
                let original = selected_text(&full, &sel).unwrap();
                prop_assert_eq!(splice(&full, &sel, &original).unwrap(), full);
            }

            /// Content outside the selection survives any replacement.
            #[test]
            fn prop_surroundings_survive(
                (lines, sel) in arb_doc_and_selection(),
                replacement in "[a-z\n]{0,20}",
            ) {
                let full = lines.join("\n");
                let result = splice(&full, &sel, &replacement).unwrap();
                let prefix = lines[..sel.start_line - 1].join("\n");
                let suffix = lines[sel.end_line..].join("\n");
                prop_assert!(result.starts_with(&prefix));
                prop_assert!(result.ends_with(&suffix));
            }
        }
    }
}
