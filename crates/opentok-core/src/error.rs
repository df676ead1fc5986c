//! # Error Types
//!
//! The validation layer has exactly one failure mode: a caller-supplied
//! argument did not satisfy its precondition. The error carries the name
//! of the parameter (as it appears on the wire) and a human-readable
//! reason.

use thiserror::Error;

/// A caller-supplied argument failed a precondition check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The argument has the wrong shape, type, or value.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Wire name of the parameter (e.g. `excludedStreams`).
        param: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// The parameter that was rejected.
    pub fn param(&self) -> &'static str {
        match self {
            Self::InvalidArgument { param, .. } => param,
        }
    }

    /// The rejection reason, without the parameter prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason, .. } => reason,
        }
    }
}
