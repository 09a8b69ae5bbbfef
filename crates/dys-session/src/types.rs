use dys_core::{ResponseScore, ScoreError};

use crate::corpus::CorpusError;

pub const DEFAULT_ATTEMPTS: usize = 3;

/// Why a submitted response was not scored. The attempt stays open with the
/// same reference sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    TooDifferent { similarity: u8 },
}

/// Result of submitting one response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResponse {
    Rejected(RejectReason),
    Accepted {
        /// 1-based attempt number that was just completed.
        attempt: usize,
        score: ResponseScore,
        /// No attempts remain; the session can be finished.
        finished: bool,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no reference sentence available: {0}")]
    Corpus(#[from] CorpusError),

    #[error("response could not be scored: {0}")]
    Score(#[from] ScoreError),

    #[error("session has no attempts left")]
    AlreadyFinished,

    #[error("a session needs at least one attempt")]
    NoAttempts,
}

pub(crate) enum SessionState {
    /// Waiting for a response. The reference is drawn lazily so that a
    /// failing source surfaces on the call that needs it.
    Awaiting { reference: Option<String> },
    Finished,
}
