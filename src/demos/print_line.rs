//! Repeated printing: emit a line, then recurse with one fewer repetition
//!
//! The line is written before the recursive call, so output order shows whether
//! the trampoline runs a frame's pre-call work in call order.

use crate::trampoline::{
    wrap, Entrypoint, Frame, FrameStep, TrampolineConfig, TrampolineError, Yielded,
};
use std::cell::RefCell;
use std::io::Write;

pub const NATIVE_LINE: &str = "Hello!";
pub const FRAMED_LINE: &str = "World!";

/// Native recursive printer, one native stack frame per line
pub fn native_print_line<W: Write>(out: &mut W, times: usize) -> std::io::Result<()> {
    if times > 0 {
        writeln!(out, "{NATIVE_LINE}")?;
        native_print_line(out, times - 1)?;
    }
    Ok(())
}

/// Frame printing `times` lines to a shared writer
pub struct PrintLineFrame<'w, W: Write> {
    out: &'w RefCell<W>,
    times: usize,
}

impl<'w, W: Write> PrintLineFrame<'w, W> {
    pub fn new(out: &'w RefCell<W>, times: usize) -> Self {
        Self { out, times }
    }
}

impl<'w, W: Write> Frame for PrintLineFrame<'w, W> {
    type Args = usize;
    type Output = ();

    fn produce(&mut self, calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        if self.times > 0 {
            writeln!(self.out.borrow_mut(), "{FRAMED_LINE}")?;
            // Yield before every recursive call
            return calls.descend(self.times - 1)?.into_step();
        }
        // Must yield something, even though the value carries nothing
        Yielded::ResultValue(()).into_step()
    }

    fn resume(&mut self, _value: (), _calls: &Entrypoint<'_, Self>) -> FrameStep<Self> {
        Yielded::ResultValue(()).into_step()
    }
}

/// Wrap `PrintLineFrame` over a shared writer
pub fn print_entrypoint<'w, W: Write>(
    out: &'w RefCell<W>,
    config: TrampolineConfig,
) -> Entrypoint<'w, PrintLineFrame<'w, W>> {
    Entrypoint::with_config(move |times: usize| PrintLineFrame::new(out, times), config)
}

/// Trampolined printer writing `times` lines to `out`
pub fn framed_print_line<W: Write>(out: &RefCell<W>, times: usize) -> Result<(), TrampolineError> {
    wrap(move |times: usize| PrintLineFrame::new(out, times)).run(times)
}
