//! Frame wrapper
//!
//! `wrap` turns a frame-producing function into an `Entrypoint`. Calling the
//! entrypoint either starts a driver loop (nothing is running yet) or hands back
//! an un-started frame for the running frame to yield (reentrant call). Nesting
//! is detected purely by whether the call stack is empty.

use super::driver::drive;
use super::errors::TrampolineError;
use super::executor::Trampoline;
use super::types::{Frame, Invocation, TrampolineConfig, TrampolineStats, Yielded};
use tracing::trace;

/// Wrap a frame-producing function with a fresh executor and default settings
pub fn wrap<'f, F, P>(frame_fn: P) -> Entrypoint<'f, F>
where
    F: Frame,
    P: Fn(F::Args) -> F + 'f,
{
    Entrypoint::with_config(frame_fn, TrampolineConfig::default())
}

/// Callable front of one wrapped function
///
/// Owns the executor (and so the call stack) for that function. An entrypoint
/// drives at most one call tree at a time and is not `Sync`; independent call
/// trees need their own entrypoints.
pub struct Entrypoint<'f, F: Frame> {
    trampoline: Trampoline<F>,
    frame_fn: Box<dyn Fn(F::Args) -> F + 'f>,
}

impl<'f, F: Frame> Entrypoint<'f, F> {
    pub fn with_config<P>(frame_fn: P, config: TrampolineConfig) -> Self
    where
        P: Fn(F::Args) -> F + 'f,
    {
        Self {
            trampoline: Trampoline::new(config),
            frame_fn: Box::new(frame_fn),
        }
    }

    /// Invoke the wrapped function
    ///
    /// - Call stack non-empty: returns `Invocation::Frame` with the un-primed
    ///   frame, for the executing frame to yield as a nested call.
    /// - Call stack empty: runs the driver loop to completion and returns
    ///   `Invocation::Finished` with the final result.
    pub fn call(&self, args: F::Args) -> Result<Invocation<F>, TrampolineError> {
        if self.trampoline.is_running() {
            self.trampoline.note_pending();
            trace!(
                target: "stackless::trampoline::wrapper",
                depth = self.trampoline.depth(),
                "reentrant call"
            );
            return Ok(Invocation::Frame((self.frame_fn)(args)));
        }

        let root = (self.frame_fn)(args);
        drive(self, root).map(Invocation::Finished)
    }

    /// Run a call tree from the top level and return its result
    pub fn run(&self, args: F::Args) -> Result<F::Output, TrampolineError> {
        if self.trampoline.is_running() {
            return Err(TrampolineError::AlreadyRunning);
        }
        drive(self, (self.frame_fn)(args))
    }

    /// Create the nested call for a recursive invocation from inside a frame
    pub fn descend(&self, args: F::Args) -> Result<Yielded<F, F::Output>, TrampolineError> {
        if !self.trampoline.is_running() {
            return Err(TrampolineError::NotRunning);
        }
        Ok(self.call(args)?.into_yielded())
    }

    pub fn is_running(&self) -> bool {
        self.trampoline.is_running()
    }

    pub fn depth(&self) -> usize {
        self.trampoline.depth()
    }

    pub fn config(&self) -> &TrampolineConfig {
        self.trampoline.config()
    }

    pub fn stats(&self) -> TrampolineStats {
        self.trampoline.stats()
    }

    pub fn reset_stats(&self) {
        self.trampoline.reset_stats()
    }

    pub(crate) fn trampoline(&self) -> &Trampoline<F> {
        &self.trampoline
    }
}
