//! Core driver loop
//!
//! This module contains drive() - the heart of the trampoline. It primes,
//! resumes and retires frames on the explicit call stack until the stack is
//! empty, reproducing the call/return order of native recursion.
//!
//! ## Function Organization
//! 1. drive() - Top-level loop (one per top-level entrypoint call)
//! 2. prime() / resume() - Advance a single frame
//! 3. retire() - Pop a frame that yielded its result

use super::errors::{FramePhase, TrampolineError};
use super::executor::Trampoline;
use super::types::{Frame, FrameStep, Yielded};
use super::wrapper::Entrypoint;
use tracing::{debug, trace, warn};

const TARGET: &str = "stackless::trampoline::driver";

/* ===================== Public API ===================== */

/// Run a call tree rooted at `root` to completion
///
/// `current` starts as `NestedCall(root)`:
/// - `NestedCall(frame)`: push the frame and prime it
/// - `ResultValue(v)`: retire the top frame; if the stack is now empty `v` is the
///   final result, otherwise resume the new top frame with `v`
pub(crate) fn drive<F: Frame>(
    calls: &Entrypoint<'_, F>,
    root: F,
) -> Result<F::Output, TrampolineError> {
    let trampoline = calls.trampoline();
    let _guard = AbandonOnExit(trampoline);

    trampoline.record(|stats| stats.drivers_started += 1);
    debug!(target: TARGET, "driver started");

    let mut current = Yielded::NestedCall(root);
    loop {
        current = match current {
            Yielded::NestedCall(frame) => prime(calls, frame)?,
            Yielded::ResultValue(value) => {
                retire(trampoline)?;

                // An empty stack means the root frame just returned
                let Some(frame) = trampoline.take_top() else {
                    let stats = trampoline.stats();
                    debug!(
                        target: TARGET,
                        frames_retired = stats.frames_retired,
                        max_depth = stats.max_depth,
                        "driver finished"
                    );
                    return Ok(value);
                };
                resume(calls, frame, value)?
            }
        };
    }
}

/* ===================== Frame Steps ===================== */

/// Push a fresh frame and advance it to its first suspension point
fn prime<F: Frame>(
    calls: &Entrypoint<'_, F>,
    mut frame: F,
) -> Result<Yielded<F, F::Output>, TrampolineError> {
    let trampoline = calls.trampoline();
    let depth = trampoline.push_active()?;
    trace!(target: TARGET, depth, "prime frame");

    let step = frame.produce(calls);
    settle(trampoline, frame, step, depth, FramePhase::Priming)
}

/// Deliver a nested call's result to the suspended top frame
fn resume<F: Frame>(
    calls: &Entrypoint<'_, F>,
    mut frame: F,
    value: F::Output,
) -> Result<Yielded<F, F::Output>, TrampolineError> {
    let trampoline = calls.trampoline();
    let depth = trampoline.depth();
    trampoline.record(|stats| stats.frames_resumed += 1);
    trace!(target: TARGET, depth, "resume frame");

    let step = frame.resume(value, calls);
    settle(trampoline, frame, step, depth, FramePhase::Resuming)
}

/// Store a frame that suspended on a nested call, or let a returning frame go
fn settle<F: Frame>(
    trampoline: &Trampoline<F>,
    frame: F,
    step: FrameStep<F>,
    depth: usize,
    phase: FramePhase,
) -> Result<Yielded<F, F::Output>, TrampolineError> {
    match step {
        Ok(Some(Yielded::NestedCall(child))) => {
            trampoline.suspend_top(frame);
            Ok(Yielded::NestedCall(child))
        }
        Ok(Some(Yielded::ResultValue(value))) => Ok(Yielded::ResultValue(value)),
        Ok(None) => Err(TrampolineError::StarvedFrame { depth, phase }),
        Err(error) => Err(TrampolineError::Frame { depth, error }),
    }
}

/// Pop the frame that just yielded its result
fn retire<F>(trampoline: &Trampoline<F>) -> Result<(), TrampolineError> {
    let Some((depth, pending)) = trampoline.pop() else {
        return Ok(());
    };
    trace!(target: TARGET, depth, "retire frame");

    if pending > 0 {
        if trampoline.config().strict {
            return Err(TrampolineError::OrderViolation { depth, pending });
        }
        warn!(
            target: TARGET,
            depth, pending, "frame returned before yielding its nested calls"
        );
    }
    Ok(())
}

/* ===================== Unwinding ===================== */

/// Clears the call stack when the driver exits, so an error or panic inside a
/// frame leaves the entrypoint ready for the next call tree
struct AbandonOnExit<'a, F>(&'a Trampoline<F>);

impl<F> Drop for AbandonOnExit<'_, F> {
    fn drop(&mut self) {
        self.0.abandon();
    }
}
