//! # Trampoline - Stack-Driven Recursion
//!
//! Runs recursive algorithms written as resumable frames on an explicit,
//! heap-allocated call stack instead of the native one.
//!
//! ## Core Principles
//!
//! 1. **Stack-driven execution**: All pending calls live in `CallStack`, no recursion
//! 2. **Suspend before descent**: A frame yields `NestedCall` where it would recurse
//!    and is resumed with that call's result
//! 3. **Single driver**: Only a top-level `Entrypoint::call` runs the driver loop;
//!    reentrant calls hand back un-started frames
//! 4. **Checked protocol**: Starved frames and dropped nested calls are reported as
//!    `TrampolineError`s instead of silently corrupting results
//!
//! ## Example
//!
//! ```rust
//! use stackless_core::trampoline::{wrap, Entrypoint, Frame, FrameStep, Yielded};
//!
//! struct Factorial(u64);
//!
//! impl Frame for Factorial {
//!     type Args = u64;
//!     type Output = u64;
//!
//!     fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
//!         if self.0 <= 1 {
//!             return Yielded::ResultValue(1).into_step();
//!         }
//!         calls.descend(self.0 - 1)?.into_step()
//!     }
//!
//!     fn resume(&mut self, value: u64, _calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
//!         Yielded::ResultValue(self.0 * value).into_step()
//!     }
//! }
//!
//! let factorial = wrap(Factorial);
//! assert_eq!(factorial.run(10).unwrap(), 3_628_800);
//! ```

pub mod call_stack;
pub mod driver;
pub mod errors;
pub mod executor;
pub mod types;
pub mod wrapper;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use call_stack::CallStack;
pub use errors::{FramePhase, TrampolineError};
pub use executor::Trampoline;
pub use types::{Frame, FrameStep, Invocation, TrampolineConfig, TrampolineStats, Yielded};
pub use wrapper::{wrap, Entrypoint};
