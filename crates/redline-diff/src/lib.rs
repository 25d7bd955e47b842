//! Diffing, merge projection and range splicing for Redline.
//!
//! This crate turns an (original, replacement) document pair into the
//! artifacts the presentation layer renders: an ordered line-level edit
//! script, optional character-level annotations for heuristically paired
//! lines, a unified merged view (and its side-by-side twin), change
//! statistics, and a splice operation that folds a sub-range replacement
//! back into the full document.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: redline-core and the `similar` diff crate
//! - Used by: redline-session
//!
//! Every function here is pure: it reads nothing but its arguments,
//! allocates fresh outputs, and is safe to call from any execution context.
//! Diff results are recomputed from scratch for each document pair, never
//! patched incrementally.
//!
//! # Usage
//!
//! ```rust,ignore
//! use redline_diff::{change_stats, diff_text, merged_view, splice};
//!
//! let ops = diff_text(original, replacement);
//! let view = merged_view(&ops);
//! let stats = change_stats(&ops);
//!
//! // On user acceptance of a sub-range edit:
//! let new_document = splice(original, selection, replacement)?;
//! ```

mod chars;
mod line;
mod merge;
mod splice;
mod stats;

pub use chars::{annotate_chars, diff_chars, AffixPairing, CharAnnotation, CharDiffOp, LinePairing};
pub use line::{diff_lines, diff_text, DiffOp};
pub use merge::{merged_text, merged_view, side_by_side, LineAnnotation, LineKind, SideBySide};
pub use splice::{selected_text, splice};
pub use stats::{change_stats, ChangeStats};
