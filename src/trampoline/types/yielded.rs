//! Suspension values exchanged between frames and the driver

use super::frame::{Frame, FrameStep};
use std::fmt;

/// Value produced by a frame at a suspension point
#[derive(Debug)]
pub enum Yielded<F, T> {
    /// An un-started frame for a pending recursive call
    NestedCall(F),
    /// This frame's return value; the frame is retired after yielding it
    ResultValue(T),
}

impl<F, T> Yielded<F, T> {
    pub fn is_nested_call(&self) -> bool {
        matches!(self, Yielded::NestedCall(_))
    }

    pub fn into_result_value(self) -> Option<T> {
        match self {
            Yielded::ResultValue(value) => Some(value),
            Yielded::NestedCall(_) => None,
        }
    }
}

impl<F: Frame> Yielded<F, F::Output> {
    /// Wrap as a successful suspension, for returning from `produce`/`resume`
    pub fn into_step(self) -> FrameStep<F> {
        Ok(Some(self))
    }
}

/// Result of invoking an `Entrypoint`
///
/// A reentrant call (made while a call tree is running) returns the un-started
/// frame; a top-level call drives the tree and returns its final value.
pub enum Invocation<F: Frame> {
    Frame(F),
    Finished(F::Output),
}

impl<F: Frame> Invocation<F> {
    /// Convert into the value a frame yields: `Frame` becomes `NestedCall`,
    /// `Finished` becomes `ResultValue`
    pub fn into_yielded(self) -> Yielded<F, F::Output> {
        match self {
            Invocation::Frame(frame) => Yielded::NestedCall(frame),
            Invocation::Finished(value) => Yielded::ResultValue(value),
        }
    }

    pub fn into_finished(self) -> Option<F::Output> {
        match self {
            Invocation::Finished(value) => Some(value),
            Invocation::Frame(_) => None,
        }
    }
}

impl<F> fmt::Debug for Invocation<F>
where
    F: Frame + fmt::Debug,
    F::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Frame(frame) => f.debug_tuple("Frame").field(frame).finish(),
            Invocation::Finished(value) => f.debug_tuple("Finished").field(value).finish(),
        }
    }
}
