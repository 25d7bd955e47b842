//! Character-level diff annotations for heuristically paired lines.
//!
//! Line pairing is best-effort by nature: it decorates lines the line-level
//! diff already classified, and never changes that classification. The
//! pairing strategy is a trait so alternative similarity heuristics can be
//! swapped in without touching the rest of the pipeline.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use ts_rs::TS;

/// One character span in a matched line pair's edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/")]
pub enum CharDiffOp {
    Equal(String),
    Delete(String),
    Insert(String),
}

impl CharDiffOp {
    pub fn span(&self) -> &str {
        match self {
            CharDiffOp::Equal(s) | CharDiffOp::Delete(s) | CharDiffOp::Insert(s) => s,
        }
    }
}

/// Character diff of a replacement-line against its paired original line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct CharAnnotation {
    /// 0-based index of the line in the replacement document.
    pub modified_line: usize,
    /// 0-based index of the paired line in the original document.
    pub original_line: usize,
    pub ops: Vec<CharDiffOp>,
}

/// Compute the minimal character-level edit script between two lines.
///
/// Operates on characters, not bytes, so multi-byte text is never split
/// mid-codepoint.
pub fn diff_chars(original: &str, modified: &str) -> Vec<CharDiffOp> {
    let o: Vec<char> = original.chars().collect();
    let m: Vec<char> = modified.chars().collect();
    let raw = capture_diff_slices(Algorithm::Myers, &o, &m);
    let mut ops = Vec::with_capacity(raw.len());
    let span = |chars: &[char]| chars.iter().collect::<String>();
    for op in raw {
        match op.tag() {
            DiffTag::Equal => ops.push(CharDiffOp::Equal(span(&o[op.old_range()]))),
            DiffTag::Delete => ops.push(CharDiffOp::Delete(span(&o[op.old_range()]))),
            DiffTag::Insert => ops.push(CharDiffOp::Insert(span(&m[op.new_range()]))),
            DiffTag::Replace => {
                ops.push(CharDiffOp::Delete(span(&o[op.old_range()])));
                ops.push(CharDiffOp::Insert(span(&m[op.new_range()])));
            }
        }
    }
    ops
}

/// Strategy for pairing a replacement line with an original line.
pub trait LinePairing: Send + Sync {
    /// Find the original line to pair `candidate` with, given the
    /// candidate's 0-based index in the replacement document. `None` means
    /// the candidate is treated as wholly inserted.
    fn pair(&self, candidate_index: usize, candidate: &str, original: &[String]) -> Option<usize>;
}

/// Pair lines that share a leading or trailing affix within a small window.
///
/// Scans outward from the candidate's own index within `±window` lines and
/// accepts the first original line where both lines exceed `min_len`
/// characters, the lines differ, and they share their first or last
/// `affix_len` characters. The constants are tuning knobs, not invariants;
/// they affect annotation quality only.
#[derive(Debug, Clone, Copy)]
pub struct AffixPairing {
    window: usize,
    min_len: usize,
    affix_len: usize,
}

impl Default for AffixPairing {
    fn default() -> Self {
        Self {
            window: 3,
            min_len: 10,
            affix_len: 5,
        }
    }
}

impl AffixPairing {
    pub fn new(window: usize, min_len: usize, affix_len: usize) -> Self {
        Self {
            window,
            min_len,
            affix_len,
        }
    }

    fn is_pair(&self, original_line: &str, candidate: &str) -> bool {
        if original_line == candidate {
            return false;
        }
        if original_line.chars().count() <= self.min_len
            || candidate.chars().count() <= self.min_len
        {
            return false;
        }
        let n = self.affix_len;
        let shared_prefix = original_line.chars().take(n).eq(candidate.chars().take(n));
        let shared_suffix = || {
            let o_tail: Vec<char> = original_line.chars().rev().take(n).collect();
            let c_tail: Vec<char> = candidate.chars().rev().take(n).collect();
            o_tail == c_tail
        };
        shared_prefix || shared_suffix()
    }
}

impl LinePairing for AffixPairing {
    fn pair(&self, candidate_index: usize, candidate: &str, original: &[String]) -> Option<usize> {
        let candidate_at = |idx: usize| {
            original
                .get(idx)
                .is_some_and(|line| self.is_pair(line, candidate))
        };
        if candidate_at(candidate_index) {
            return Some(candidate_index);
        }
        for delta in 1..=self.window {
            if let Some(below) = candidate_index.checked_sub(delta) {
                if candidate_at(below) {
                    return Some(below);
                }
            }
            let above = candidate_index + delta;
            if candidate_at(above) {
                return Some(above);
            }
        }
        None
    }
}

/// Annotate replacement lines with character diffs against paired originals.
///
/// Blank candidates and candidates identical to the original line at the
/// same index are skipped; unpaired candidates get no annotation.
pub fn annotate_chars(
    original: &[String],
    modified: &[String],
    pairing: &dyn LinePairing,
) -> Vec<CharAnnotation> {
    let mut annotations = Vec::new();
    for (idx, candidate) in modified.iter().enumerate() {
        if candidate.trim().is_empty() {
            continue;
        }
        if original.get(idx) == Some(candidate) {
            continue;
        }
        if let Some(original_line) = pairing.pair(idx, candidate, original) {
            annotations.push(CharAnnotation {
                modified_line: idx,
                original_line,
                ops: diff_chars(&original[original_line], candidate),
            });
        }
    }
    annotations
}
