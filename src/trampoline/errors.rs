//! Errors raised while driving a call tree

use std::fmt;
use thiserror::Error;

/// Which driver operation was advancing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    Priming,
    Resuming,
}

impl fmt::Display for FramePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramePhase::Priming => f.write_str("priming"),
            FramePhase::Resuming => f.write_str("resuming"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrampolineError {
    /// The frame body completed without yielding, so it cannot be retired
    #[error("frame at depth {depth} finished without yielding a value while {phase}")]
    StarvedFrame { depth: usize, phase: FramePhase },

    /// The frame returned while holding nested calls it never yielded
    #[error("frame at depth {depth} returned before yielding {pending} nested call(s)")]
    OrderViolation { depth: usize, pending: usize },

    #[error("call stack depth limit of {limit} frames exceeded")]
    DepthExceeded { limit: usize },

    #[error("entrypoint is already driving a call tree")]
    AlreadyRunning,

    #[error("no call tree is in progress")]
    NotRunning,

    /// The frame body returned an error
    #[error("frame at depth {depth} failed: {error:#}")]
    Frame { depth: usize, error: anyhow::Error },
}

impl TrampolineError {
    /// The error returned by a frame body, if this is a frame failure
    pub fn frame_error(&self) -> Option<&anyhow::Error> {
        match self {
            TrampolineError::Frame { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True for errors caused by a frame breaking the yield protocol
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            TrampolineError::StarvedFrame { .. } | TrampolineError::OrderViolation { .. }
        )
    }
}
