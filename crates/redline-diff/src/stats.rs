//! Aggregate change statistics over a line diff.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line::DiffOp;

/// Added/removed/changed line counts for a diff.
///
/// `changed` counts line pairs inside replacement hunks: for every Delete
/// group immediately followed by an Insert group it contributes the shorter
/// of the two group lengths. Inserts and deletes without an adjacent group
/// of the opposite kind contribute to `added`/`removed` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct ChangeStats {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl ChangeStats {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// Count added, removed and changed lines across a diff.
pub fn change_stats(ops: &[DiffOp]) -> ChangeStats {
    let mut stats = ChangeStats::default();
    for (idx, op) in ops.iter().enumerate() {
        match op {
            DiffOp::Equal(_) => {}
            DiffOp::Insert(lines) => stats.added += lines.len(),
            DiffOp::Delete(lines) => {
                stats.removed += lines.len();
                if let Some(DiffOp::Insert(inserted)) = ops.get(idx + 1) {
                    stats.changed += lines.len().min(inserted.len());
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::diff_lines;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replacement_hunk_counts_as_changed() {
        // Scenario: Equal, Delete(1), Insert(1), Equal.
        let ops = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert_eq!(
            change_stats(&ops),
            ChangeStats {
                added: 1,
                removed: 1,
                changed: 1,
            }
        );
    }

    #[test]
    fn test_pure_insert_is_never_changed() {
        let ops = diff_lines(&lines(&["a", "b"]), &lines(&["a", "b", "c"]));
        assert_eq!(
            change_stats(&ops),
            ChangeStats {
                added: 1,
                removed: 0,
                changed: 0,
            }
        );
    }

    #[test]
    fn test_identical_inputs_yield_zero_stats() {
        let o = lines(&["a", "b", "c"]);
        assert_eq!(change_stats(&diff_lines(&o, &o)), ChangeStats::default());
        assert!(!change_stats(&diff_lines(&o, &o)).has_changes());
    }

    #[test]
    fn test_changed_is_bounded_by_shorter_hunk() {
        // Two original lines replaced by five new ones: changed = 2.
        let ops = vec![
            DiffOp::Delete(lines(&["a", "b"])),
            DiffOp::Insert(lines(&["v", "w", "x", "y", "z"])),
        ];
        assert_eq!(
            change_stats(&ops),
            ChangeStats {
                added: 5,
                removed: 2,
                changed: 2,
            }
        );
    }

    #[test]
    fn test_separated_hunks_do_not_pair() {
        let ops = vec![
            DiffOp::Delete(lines(&["a"])),
            DiffOp::Equal(lines(&["k"])),
            DiffOp::Insert(lines(&["b"])),
        ];
        assert_eq!(
            change_stats(&ops),
            ChangeStats {
                added: 1,
                removed: 1,
                changed: 0,
            }
        );
    }
}
