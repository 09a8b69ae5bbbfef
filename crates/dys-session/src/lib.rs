//! Screening session: draws reference sentences, gates typed responses,
//! scores the accepted ones and builds the final report.
//!
//! `ScreeningSession` owns the per-subject state. The scorer and its
//! vocabulary/catalog are shared and never mutated, so many sessions can run
//! against one `ResponseScorer`.

pub mod corpus;
pub mod gate;
pub mod report;
mod types;

#[cfg(test)]
mod tests;

use dys_core::{aggregate, ResponseScorer};
use tracing::{debug, debug_span};

pub use corpus::{CorpusError, SentenceCorpus, SentenceSource};
pub use gate::{similarity, AcceptanceGate, GateDecision};
pub use report::{
    AttemptRecord, JsonReportSink, ReportError, ReportSink, SessionMetadata, SessionReport,
};
pub use types::{RejectReason, SessionError, SubmitResponse, DEFAULT_ATTEMPTS};

use types::SessionState;

pub struct ScreeningSession<S: SentenceSource> {
    source: S,
    scorer: ResponseScorer,
    gate: AcceptanceGate,
    max_attempts: usize,

    state: SessionState,
    attempts: Vec<AttemptRecord>,
}

impl<S: SentenceSource> ScreeningSession<S> {
    /// New session; the gate threshold comes from the scorer's settings.
    pub fn new(
        source: S,
        scorer: ResponseScorer,
        max_attempts: usize,
    ) -> Result<Self, SessionError> {
        if max_attempts == 0 {
            return Err(SessionError::NoAttempts);
        }
        let gate = AcceptanceGate::from_settings(scorer.settings());
        Ok(Self {
            source,
            scorer,
            gate,
            max_attempts,
            state: SessionState::Awaiting { reference: None },
            attempts: Vec::new(),
        })
    }

    pub fn with_gate(mut self, gate: AcceptanceGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished)
    }

    /// 1-based number of the attempt in progress, or `None` once finished.
    pub fn attempt_number(&self) -> Option<usize> {
        match self.state {
            SessionState::Awaiting { .. } => Some(self.attempts.len() + 1),
            SessionState::Finished => None,
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Reference sentence for the attempt in progress, drawn on first use.
    pub fn current_reference(&mut self) -> Result<&str, SessionError> {
        match &mut self.state {
            SessionState::Finished => Err(SessionError::AlreadyFinished),
            SessionState::Awaiting { reference } => {
                if reference.is_none() {
                    let sentence = self.source.next_sentence()?;
                    debug!(
                        attempt = self.attempts.len() + 1,
                        reference = %sentence,
                        "new reference"
                    );
                    *reference = Some(sentence);
                }
                Ok(reference.as_deref().unwrap_or_default())
            }
        }
    }

    /// Submit a typed response for the attempt in progress.
    ///
    /// Rejected responses leave the attempt open. An accepted response that
    /// cannot be scored (no word tokens) returns `SessionError::Score` and
    /// also leaves the attempt open.
    pub fn submit(&mut self, response: &str) -> Result<SubmitResponse, SessionError> {
        let reference = self.current_reference()?.to_string();
        let attempt = self.attempts.len() + 1;
        let _span = debug_span!("submit", attempt).entered();

        let decision = self.gate.check(response, &reference);
        debug!(?decision);
        match decision {
            GateDecision::Empty => return Ok(SubmitResponse::Rejected(RejectReason::Empty)),
            GateDecision::TooDifferent { similarity } => {
                return Ok(SubmitResponse::Rejected(RejectReason::TooDifferent {
                    similarity,
                }))
            }
            GateDecision::Exact | GateDecision::Similar { .. } => {}
        }

        let score = self.scorer.score(response, &reference)?;
        self.attempts.push(AttemptRecord {
            attempt,
            reference,
            response: response.trim().to_string(),
            score: score.clone(),
        });

        let finished = self.attempts.len() >= self.max_attempts;
        self.state = if finished {
            SessionState::Finished
        } else {
            SessionState::Awaiting { reference: None }
        };

        Ok(SubmitResponse::Accepted {
            attempt,
            score,
            finished,
        })
    }

    /// Aggregate the accepted attempts into a report. May be called before
    /// all attempts are used; only accepted attempts count.
    pub fn finish(self, metadata: SessionMetadata) -> SessionReport {
        let threshold = self.scorer.settings().threshold.verdict;
        let scores: Vec<f64> = self.attempts.iter().map(|a| a.score.value).collect();
        let aggregate = aggregate(&scores, threshold);
        debug!(
            attempts = self.attempts.len(),
            score = aggregate.score,
            verdict = ?aggregate.verdict
        );
        SessionReport {
            metadata,
            attempts: self.attempts,
            aggregate,
            verdict_threshold: threshold,
        }
    }
}
