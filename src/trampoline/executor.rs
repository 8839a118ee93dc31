//! Trampoline executor state
//!
//! The executor owns the call stack for one wrapped function, together with its
//! settings and counters. The stack sits behind a `RefCell` so that frames can
//! make reentrant calls through a shared `&Entrypoint` while the driver runs.

use super::call_stack::CallStack;
use super::errors::TrampolineError;
use super::types::{TrampolineConfig, TrampolineStats};
use std::cell::{Cell, RefCell};

/* ===================== Trampoline ===================== */

#[derive(Debug)]
pub struct Trampoline<F> {
    stack: RefCell<CallStack<F>>,
    config: TrampolineConfig,
    stats: Cell<TrampolineStats>,
}

impl<F> Trampoline<F> {
    pub fn new(config: TrampolineConfig) -> Self {
        Self {
            stack: RefCell::new(CallStack::new()),
            config,
            stats: Cell::new(TrampolineStats::default()),
        }
    }

    pub fn config(&self) -> &TrampolineConfig {
        &self.config
    }

    /// True while a driver loop is running a call tree
    pub fn is_running(&self) -> bool {
        !self.stack.borrow().is_empty()
    }

    /// Current number of frames on the call stack
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    pub fn stats(&self) -> TrampolineStats {
        self.stats.get()
    }

    pub fn reset_stats(&self) {
        self.stats.set(TrampolineStats::default());
    }

    /* ===================== Driver Operations ===================== */

    pub(crate) fn record(&self, update: impl FnOnce(&mut TrampolineStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    /// Push a slot for a frame about to be primed, enforcing the depth limit
    pub(crate) fn push_active(&self) -> Result<usize, TrampolineError> {
        let mut stack = self.stack.borrow_mut();
        if let Some(limit) = self.config.max_depth {
            if stack.len() >= limit {
                return Err(TrampolineError::DepthExceeded { limit });
            }
        }
        let depth = stack.push_active();
        drop(stack);

        self.record(|stats| {
            stats.frames_primed += 1;
            stats.max_depth = stats.max_depth.max(depth);
        });
        Ok(depth)
    }

    /// Park a frame that yielded a nested call and settle that call
    pub(crate) fn suspend_top(&self, frame: F) {
        let mut stack = self.stack.borrow_mut();
        stack.suspend_top(frame);
        stack.settle_pending();
    }

    pub(crate) fn take_top(&self) -> Option<F> {
        self.stack.borrow_mut().take_top()
    }

    /// Pop the top slot; returns the depth it occupied and its pending count
    pub(crate) fn pop(&self) -> Option<(usize, usize)> {
        let mut stack = self.stack.borrow_mut();
        let depth = stack.len();
        let pending = stack.pop()?;
        drop(stack);

        self.record(|stats| stats.frames_retired += 1);
        Some((depth, pending))
    }

    pub(crate) fn note_pending(&self) {
        self.stack.borrow_mut().note_pending();
    }

    /// Abandon whatever is left on the stack
    ///
    /// Called while unwinding out of the driver, possibly during a panic, so it
    /// must not panic itself.
    pub(crate) fn abandon(&self) {
        if let Ok(mut stack) = self.stack.try_borrow_mut() {
            stack.clear();
        }
    }
}
