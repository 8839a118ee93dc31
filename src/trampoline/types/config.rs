//! Executor settings

use serde::{Deserialize, Serialize};

/// Settings for one trampoline executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrampolineConfig {
    /// Maximum number of frames on the call stack (unbounded when unset)
    pub max_depth: Option<usize>,

    /// Fail with `OrderViolation` when a frame returns while it still holds
    /// nested calls it never yielded. When false the violation is only logged.
    pub strict: bool,
}

impl Default for TrampolineConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            strict: true,
        }
    }
}
