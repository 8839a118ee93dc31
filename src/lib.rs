pub mod cli;
pub mod config;
pub mod demos;
pub mod trampoline;

// Re-export main types
pub use trampoline::{
    wrap, Entrypoint, Frame, FrameStep, Invocation, TrampolineConfig, TrampolineError, Yielded,
};
