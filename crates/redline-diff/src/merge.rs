//! Projections of a line diff for rendering.
//!
//! Two derived views over the same `DiffOp` sequence: a unified merged view
//! that interleaves removed lines in place, and a side-by-side view that
//! reconstructs both documents verbatim. Neither view re-runs the diff.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line::DiffOp;

/// Classification of a line in the merged view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/")]
pub enum LineKind {
    Added,
    Removed,
    Unchanged,
}

/// One line of the merged view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct LineAnnotation {
    /// 0-based position in merged-view order.
    pub position: usize,
    pub kind: LineKind,
    pub content: String,
}

/// Both documents reconstructed for two-pane rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct SideBySide {
    pub original: Vec<String>,
    pub modified: Vec<String>,
}

/// Project a diff into a single annotated line sequence.
///
/// Equal and Insert lines appear in natural reading order; Delete lines are
/// interleaved immediately before the point of removal so a reviewer sees
/// deletions in place. Output length always equals the total line count
/// across all groups of the diff.
pub fn merged_view(ops: &[DiffOp]) -> Vec<LineAnnotation> {
    let total: usize = ops.iter().map(DiffOp::line_count).sum();
    let mut view = Vec::with_capacity(total);
    for op in ops {
        let kind = match op {
            DiffOp::Equal(_) => LineKind::Unchanged,
            DiffOp::Delete(_) => LineKind::Removed,
            DiffOp::Insert(_) => LineKind::Added,
        };
        for line in op.lines() {
            view.push(LineAnnotation {
                position: view.len(),
                kind,
                content: line.clone(),
            });
        }
    }
    view
}

/// Join a merged view back into renderable text.
pub fn merged_text(view: &[LineAnnotation]) -> String {
    view.iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reconstruct both documents from the diff for side-by-side rendering.
pub fn side_by_side(ops: &[DiffOp]) -> SideBySide {
    let mut original = Vec::new();
    let mut modified = Vec::new();
    for op in ops {
        match op {
            DiffOp::Equal(lines) => {
                original.extend(lines.iter().cloned());
                modified.extend(lines.iter().cloned());
            }
            DiffOp::Delete(lines) => original.extend(lines.iter().cloned()),
            DiffOp::Insert(lines) => modified.extend(lines.iter().cloned()),
        }
    }
    SideBySide { original, modified }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::diff_lines;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removed_lines_appear_in_place() {
        let ops = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        let view = merged_view(&ops);
        let kinds: Vec<LineKind> = view.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Unchanged,
                LineKind::Removed,
                LineKind::Added,
                LineKind::Unchanged,
            ]
        );
        assert_eq!(view[1].content, "b");
        assert_eq!(view[2].content, "x");
    }

    #[test]
    fn test_positions_are_sequential_merged_indices() {
        let ops = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "y", "c"]));
        let view = merged_view(&ops);
        for (idx, line) in view.iter().enumerate() {
            assert_eq!(line.position, idx);
        }
    }

    #[test]
    fn test_view_length_equals_total_op_line_count() {
        let ops = diff_lines(
            &lines(&["a", "b", "c", "d"]),
            &lines(&["a", "x", "c", "d", "e"]),
        );
        let total: usize = ops.iter().map(DiffOp::line_count).sum();
        assert_eq!(merged_view(&ops).len(), total);
    }

    #[test]
    fn test_side_by_side_reconstructs_both_documents() {
        let o = lines(&["a", "b", "c"]);
        let m = lines(&["a", "x", "c", "d"]);
        let panes = side_by_side(&diff_lines(&o, &m));
        assert_eq!(panes.original, o);
        assert_eq!(panes.modified, m);
    }

    #[test]
    fn test_merged_text_joins_contents() {
        let ops = diff_lines(&lines(&["a", "b"]), &lines(&["a", "x"]));
        assert_eq!(merged_text(&merged_view(&ops)), "a\nb\nx");
    }
}
