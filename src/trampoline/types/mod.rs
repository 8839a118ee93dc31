//! Type definitions for the trampoline
//!
//! This module contains the core types shared by the driver and by frames:
//! - The resumable frame contract (Frame, FrameStep)
//! - Suspension values (Yielded, Invocation)
//! - Executor settings and counters (TrampolineConfig, TrampolineStats)

pub mod config;
pub mod frame;
pub mod stats;
pub mod yielded;

// Re-export all types for convenient access
pub use config::TrampolineConfig;
pub use frame::{Frame, FrameStep};
pub use stats::TrampolineStats;
pub use yielded::{Invocation, Yielded};
