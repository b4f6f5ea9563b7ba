use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the synt workspace.
///
/// Covers malformed analysis inputs, data issues in retrieved series,
/// source-tagged failures, not-found conditions, and an aggregate for
/// multi-source attempts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntError {
    /// Resampling was requested on a table with no sessions.
    #[error("cannot prepare an empty series")]
    EmptyInput,

    /// Movement analysis was requested on a table with no sessions.
    #[error("cannot analyze an empty table")]
    EmptyTable,

    /// A frequency label outside the recognized set.
    #[error("invalid frequency: {0}")]
    InvalidFrequency(String),

    /// The session step must be a positive number of sessions.
    #[error("invalid step: {step} (must be at least 1)")]
    InvalidStep {
        /// The rejected step.
        step: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (ordering, currencies, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A resource could not be found, e.g. no sessions in the requested range.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource.
        what: String,
    },

    /// An individual history source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {source_name}")]
    SourceTimeout {
        /// Source name that timed out.
        source_name: String,
        /// Capability label (e.g. "history").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All selected sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<SyntError>),

    /// All attempted sources timed out for the requested capability.
    #[error("all sources timed out: {capability}")]
    AllSourcesTimedOut {
        /// Capability label that timed out across all sources.
        capability: String,
    },
}

impl SyntError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failure(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source_name: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A benign not-found ("no data for the period") is not actionable.
    /// Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::NotFound { .. } => false,
            Self::AllSourcesFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
