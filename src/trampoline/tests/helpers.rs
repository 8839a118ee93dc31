//! Test frames shared by the trampoline tests
//!
//! - `FibFrame`: two nested calls per frame, logging entry and exit
//! - `ChainFrame`: a linear chain that can be told to break the yield protocol

use crate::trampoline::{Entrypoint, Frame, FrameStep, TrampolineConfig, Yielded};
use anyhow::anyhow;
use std::cell::{Cell, RefCell};

/* ===================== Fibonacci with event log ===================== */

/// Native recursive Fibonacci recording `enter n` / `exit n` events
pub fn native_fib(n: u64, log: &RefCell<Vec<String>>) -> u64 {
    log.borrow_mut().push(format!("enter {}", n));
    let value = if n < 2 {
        n
    } else {
        native_fib(n - 1, log) + native_fib(n - 2, log)
    };
    log.borrow_mut().push(format!("exit {}", n));
    value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FibPhase {
    Start,
    /// Waiting for fib(n - 1)
    First,
    /// Waiting for fib(n - 2); holds fib(n - 1)
    Second(u64),
}

pub struct FibFrame<'a> {
    n: u64,
    phase: FibPhase,
    log: &'a RefCell<Vec<String>>,
}

impl<'a> FibFrame<'a> {
    pub fn new(n: u64, log: &'a RefCell<Vec<String>>) -> Self {
        Self {
            n,
            phase: FibPhase::Start,
            log,
        }
    }

    fn exit(&self, value: u64) -> FrameStep<Self> {
        self.log.borrow_mut().push(format!("exit {}", self.n));
        Yielded::ResultValue(value).into_step()
    }
}

impl<'a> Frame for FibFrame<'a> {
    type Args = u64;
    type Output = u64;

    fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        debug_assert_eq!(self.phase, FibPhase::Start);
        self.log.borrow_mut().push(format!("enter {}", self.n));
        if self.n < 2 {
            return self.exit(self.n);
        }
        self.phase = FibPhase::First;
        calls.descend(self.n - 1)?.into_step()
    }

    fn resume(&mut self, value: u64, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        match self.phase {
            FibPhase::First => {
                self.phase = FibPhase::Second(value);
                calls.descend(self.n - 2)?.into_step()
            }
            FibPhase::Second(first) => self.exit(first + value),
            FibPhase::Start => Err(anyhow!("resumed before priming")),
        }
    }
}

pub fn fib_entrypoint(log: &RefCell<Vec<String>>) -> Entrypoint<'_, FibFrame<'_>> {
    Entrypoint::with_config(
        move |n: u64| FibFrame::new(n, log),
        TrampolineConfig::default(),
    )
}

/* ===================== Chain with injected faults ===================== */

/// How a `ChainFrame` misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    None,
    /// The deepest frame finishes without yielding
    StarveOnPrime,
    /// The frame just above the deepest one finishes without yielding after resume
    StarveOnResume,
    /// The frame just above the deepest one obtains a nested call and returns
    /// without yielding it
    LeakNestedCall,
    /// The deepest frame returns an error
    FailOnPrime,
    /// The deepest frame panics
    Panic,
    /// The deepest frame tries to start a second driver
    Rerun,
}

/// Counts its own depth: a chain started with `remaining = n` returns `n`
#[derive(Debug)]
pub struct ChainFrame {
    remaining: usize,
    fault: Fault,
}

impl Frame for ChainFrame {
    type Args = usize;
    type Output = usize;

    fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        if self.remaining == 0 {
            return match self.fault {
                Fault::StarveOnPrime => Ok(None),
                Fault::FailOnPrime => Err(anyhow!("bottom frame failed")),
                Fault::Panic => panic!("bottom frame panicked"),
                Fault::Rerun => {
                    calls.run(0)?;
                    Yielded::ResultValue(0).into_step()
                }
                _ => Yielded::ResultValue(0).into_step(),
            };
        }

        if self.remaining == 1 && self.fault == Fault::LeakNestedCall {
            let _leaked = calls.call(0)?;
            return Yielded::ResultValue(1).into_step();
        }

        calls.descend(self.remaining - 1)?.into_step()
    }

    fn resume(&mut self, value: usize, _calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        if self.remaining == 1 && self.fault == Fault::StarveOnResume {
            return Ok(None);
        }
        Yielded::ResultValue(value + 1).into_step()
    }
}

/// Chain entrypoint whose frames read their fault from `fault` when created
pub fn chain_entrypoint(
    fault: &Cell<Fault>,
    config: TrampolineConfig,
) -> Entrypoint<'_, ChainFrame> {
    Entrypoint::with_config(
        move |remaining: usize| ChainFrame {
            remaining,
            fault: fault.get(),
        },
        config,
    )
}

pub fn lenient() -> TrampolineConfig {
    TrampolineConfig {
        strict: false,
        ..TrampolineConfig::default()
    }
}
