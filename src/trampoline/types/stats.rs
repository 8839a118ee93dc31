//! Execution counters

use serde::{Deserialize, Serialize};

/// Counters accumulated by one executor across all call trees it has driven
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrampolineStats {
    /// Number of driver loops started (one per top-level call)
    pub drivers_started: u64,
    pub frames_primed: u64,
    pub frames_resumed: u64,
    pub frames_retired: u64,
    /// Deepest call stack observed
    pub max_depth: usize,
}
