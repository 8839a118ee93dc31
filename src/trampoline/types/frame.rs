//! The resumable frame contract

use super::yielded::Yielded;
use crate::trampoline::wrapper::Entrypoint;

/// Outcome of advancing a frame to its next suspension point
///
/// - `Ok(Some(_))`: the frame suspended and yielded a value
/// - `Ok(None)`: the frame body ran off its end without yielding (a starved frame)
/// - `Err(_)`: the frame body failed
pub type FrameStep<F> = anyhow::Result<Option<Yielded<F, <F as Frame>::Output>>>;

/// One activation record of a recursive algorithm, written as a state machine
///
/// A frame stands in for a single recursive invocation. Wherever the recursive
/// version would call itself, the frame yields `Yielded::NestedCall` with a fresh
/// frame and stores whatever locals it needs afterwards. The driver runs the nested
/// frame to completion and hands its result back through `resume`.
///
/// Every frame must finish by yielding `Yielded::ResultValue`, even when the value
/// is `()`.
pub trait Frame: Sized {
    /// Arguments of the frame-producing function
    type Args;

    /// Value this frame returns to its caller
    type Output;

    /// Advance a fresh frame to its first suspension point (priming)
    ///
    /// Side effects performed here happen in call order, before any nested call
    /// this frame issues.
    fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self>;

    /// Deliver the result of the last nested call and advance to the next
    /// suspension point
    fn resume(&mut self, value: Self::Output, calls: &Entrypoint<'_, Self>) -> FrameStep<Self>;
}
