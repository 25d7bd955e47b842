//! The session-scoped workflow state machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use redline_core::{
    AiCollaborator, Document, ModifyRequest, ModifyResponse, RedlineError, Result, Selection,
};
use redline_diff::{
    annotate_chars, change_stats, diff_lines, merged_view, selected_text, side_by_side, splice,
    AffixPairing, ChangeStats, CharAnnotation, DiffOp, LineAnnotation, LinePairing, SideBySide,
};
use redline_settings::RedlineSettings;

/// Workflow phase of an edit session, used by the presentation layer to
/// gate user actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/")]
pub enum WorkflowState {
    Idle,
    Requesting,
    DiffReady,
    Integrated,
    Failed(String),
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowState::Idle => write!(f, "idle"),
            WorkflowState::Requesting => write!(f, "requesting"),
            WorkflowState::DiffReady => write!(f, "diff_ready"),
            WorkflowState::Integrated => write!(f, "integrated"),
            WorkflowState::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Everything the presentation layer renders for one accepted response.
///
/// Recomputed from scratch for every (original, replacement) pair; stale
/// artifacts are dropped wholesale rather than patched.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct DiffArtifacts {
    pub ops: Vec<DiffOp>,
    pub merged: Vec<LineAnnotation>,
    pub side_by_side: SideBySide,
    pub stats: ChangeStats,
    pub char_annotations: Vec<CharAnnotation>,
}

/// A submission handed back by [`EditSession::begin_submit`]: the request to
/// forward to the collaborator and the generation tag its response must
/// carry.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub generation: u64,
    pub request: ModifyRequest,
}

/// Selection and source snapshot frozen at submission time. Live-document
/// edits during the request never move the range that will be spliced.
#[derive(Debug, Clone)]
struct CapturedCycle {
    selection: Option<Selection>,
    source: String,
}

/// A session-scoped state machine owning the live document, the active
/// selection and the workflow state for one edit cycle.
pub struct EditSession {
    collaborator: Arc<dyn AiCollaborator>,
    pairing: Arc<dyn LinePairing>,
    plausibility_threshold: usize,
    document: String,
    language: String,
    selection: Option<Selection>,
    state: WorkflowState,
    generation: u64,
    captured: Option<CapturedCycle>,
    replacement: Option<String>,
    explanation: Option<String>,
    artifacts: Option<DiffArtifacts>,
}

impl EditSession {
    pub fn new(collaborator: Arc<dyn AiCollaborator>, settings: &RedlineSettings) -> Self {
        let pairing = AffixPairing::new(
            settings.diff.pairing_window,
            settings.diff.min_pair_line_len,
            settings.diff.affix_len,
        );
        Self {
            collaborator,
            pairing: Arc::new(pairing),
            plausibility_threshold: settings.session.plausibility_threshold,
            document: String::new(),
            language: "javascript".to_string(),
            selection: None,
            state: WorkflowState::Idle,
            generation: 0,
            captured: None,
            replacement: None,
            explanation: None,
            artifacts: None,
        }
    }

    /// Swap in an alternative line-pairing strategy.
    pub fn with_pairing(mut self, pairing: Arc<dyn LinePairing>) -> Self {
        self.pairing = pairing;
        self
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn artifacts(&self) -> Option<&DiffArtifacts> {
        self.artifacts.as_ref()
    }

    pub fn stats(&self) -> Option<ChangeStats> {
        self.artifacts.as_ref().map(|a| a.stats)
    }

    pub fn has_changes(&self) -> bool {
        self.stats().is_some_and(|s| s.has_changes())
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the live document. A selection the new text can no longer
    /// satisfy is dropped.
    pub fn set_document(&mut self, text: impl Into<String>) {
        self.document = text.into();
        let line_count = Document::from_text(&self.document).line_count();
        if let Some(selection) = self.selection {
            if selection.validate(line_count).is_err() {
                tracing::debug!("selection invalidated by document edit, clearing");
                self.selection = None;
            }
        }
    }

    /// Set or clear the active selection, validated against the live
    /// document.
    pub fn set_selection(&mut self, selection: Option<Selection>) -> Result<()> {
        if let Some(selection) = selection {
            let line_count = Document::from_text(&self.document).line_count();
            selection.validate(line_count)?;
        }
        self.selection = selection;
        Ok(())
    }

    /// Start a request cycle: validate inputs, freeze the selection and
    /// source snapshot, bump the generation and move to `Requesting`.
    ///
    /// The caller forwards the returned request to the collaborator and
    /// reports the outcome through [`apply_outcome`](Self::apply_outcome)
    /// with the returned generation. [`submit`](Self::submit) does both.
    pub fn begin_submit(&mut self, instruction: &str) -> Result<PendingSubmission> {
        if matches!(self.state, WorkflowState::Requesting) {
            return Err(RedlineError::Precondition(
                "a request is already in flight".to_string(),
            ));
        }
        if self.document.trim().is_empty() {
            return Err(RedlineError::Input("document is empty".to_string()));
        }
        if instruction.trim().is_empty() {
            return Err(RedlineError::Input("instruction is empty".to_string()));
        }

        let selection = self.selection;
        let source = match selection {
            Some(ref sel) => selected_text(&self.document, sel)?,
            None => self.document.clone(),
        };

        self.generation += 1;
        self.captured = Some(CapturedCycle {
            selection,
            source: source.clone(),
        });
        self.state = WorkflowState::Requesting;
        tracing::debug!(
            generation = self.generation,
            with_selection = selection.is_some(),
            "submitting modification request"
        );

        Ok(PendingSubmission {
            generation: self.generation,
            request: ModifyRequest {
                source_text: source,
                instruction: instruction.to_string(),
                language: self.language.clone(),
                selection,
                full_context: selection.map(|_| self.document.clone()),
            },
        })
    }

    /// Feed a collaborator outcome back into the state machine.
    ///
    /// A response whose generation no longer matches the session's is
    /// discarded: neither the workflow state nor stored artifacts change.
    pub fn apply_outcome(&mut self, generation: u64, outcome: Result<ModifyResponse>) {
        if generation != self.generation || !matches!(self.state, WorkflowState::Requesting) {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale collaborator response"
            );
            return;
        }

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("modification request failed: {}", err);
                self.fail(failure_reason(&err));
                return;
            }
        };

        let len = response.modified_code.chars().count();
        if len < self.plausibility_threshold {
            let err = RedlineError::ImplausibleResponse {
                len,
                min: self.plausibility_threshold,
            };
            tracing::warn!("{}", err);
            self.fail(failure_reason(&err));
            return;
        }

        let captured = match self.captured.as_ref() {
            Some(captured) => captured,
            None => {
                // Requesting without a captured cycle cannot happen through
                // the public API.
                self.fail("internal: no captured request cycle".to_string());
                return;
            }
        };

        let source_lines = Document::from_text(&captured.source).into_lines();
        let modified_lines = Document::from_text(&response.modified_code).into_lines();
        let ops = diff_lines(&source_lines, &modified_lines);
        let stats = change_stats(&ops);
        let artifacts = DiffArtifacts {
            merged: merged_view(&ops),
            side_by_side: side_by_side(&ops),
            stats,
            char_annotations: annotate_chars(&source_lines, &modified_lines, self.pairing.as_ref()),
            ops,
        };

        tracing::info!(
            added = stats.added,
            removed = stats.removed,
            changed = stats.changed,
            "modification response accepted"
        );
        self.replacement = Some(response.modified_code);
        self.explanation = Some(response.explanation);
        self.artifacts = Some(artifacts);
        self.state = WorkflowState::DiffReady;
    }

    /// Submit an instruction and wait for the collaborator's response.
    pub async fn submit(&mut self, instruction: &str) -> Result<&WorkflowState> {
        let pending = self.begin_submit(instruction)?;
        let collaborator = Arc::clone(&self.collaborator);
        let outcome = collaborator.modify(pending.request).await;
        self.apply_outcome(pending.generation, outcome);
        Ok(&self.state)
    }

    /// Accept the pending replacement and fold it into the live document.
    ///
    /// If a selection was captured at submission time the replacement is
    /// spliced into that range; otherwise it becomes the new document
    /// wholesale. Clears the selection and all per-cycle state.
    pub fn integrate(&mut self) -> Result<String> {
        if !matches!(self.state, WorkflowState::DiffReady) {
            return Err(RedlineError::Precondition(format!(
                "cannot integrate while {}",
                self.state
            )));
        }
        let replacement = self.replacement.as_deref().ok_or_else(|| {
            RedlineError::Precondition("no replacement available".to_string())
        })?;

        let captured_selection = self.captured.as_ref().and_then(|c| c.selection);
        let new_document = match captured_selection {
            Some(selection) => splice(&self.document, &selection, replacement)?,
            None => replacement.to_string(),
        };

        tracing::info!(
            spliced = captured_selection.is_some(),
            "integrated modification into document"
        );
        self.document = new_document.clone();
        self.clear_cycle();
        self.selection = None;
        self.state = WorkflowState::Integrated;
        Ok(new_document)
    }

    /// Drop the pending replacement (or a failure) and return to `Idle`.
    pub fn discard(&mut self) -> Result<()> {
        if matches!(self.state, WorkflowState::Requesting) {
            return Err(RedlineError::Precondition(
                "cannot discard an in-flight request, cancel it instead".to_string(),
            ));
        }
        self.clear_cycle();
        self.state = WorkflowState::Idle;
        Ok(())
    }

    /// Abandon the in-flight request. The generation bump guarantees that a
    /// response arriving later is discarded; cancelling the transport itself
    /// is the collaborator's job.
    pub fn cancel(&mut self) -> Result<()> {
        if !matches!(self.state, WorkflowState::Requesting) {
            return Err(RedlineError::Precondition(format!(
                "no request to cancel while {}",
                self.state
            )));
        }
        self.generation += 1;
        self.clear_cycle();
        self.state = WorkflowState::Idle;
        tracing::debug!(generation = self.generation, "cancelled in-flight request");
        Ok(())
    }

    fn fail(&mut self, reason: String) {
        self.clear_cycle();
        self.state = WorkflowState::Failed(reason);
    }

    fn clear_cycle(&mut self) {
        self.captured = None;
        self.replacement = None;
        self.explanation = None;
        self.artifacts = None;
    }
}

/// Reason string surfaced to the presentation layer for a failed cycle.
fn failure_reason(err: &RedlineError) -> String {
    match err {
        RedlineError::ImplausibleResponse { .. } => "implausible response".to_string(),
        other => other.to_string(),
    }
}
