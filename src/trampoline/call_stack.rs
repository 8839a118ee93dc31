//! The heap-resident call stack
//!
//! Replaces the native stack for one call tree. The frame on top is the one
//! currently executing; every frame below it is suspended at a nested call.

/// One activation on the stack
#[derive(Debug)]
struct Slot<F> {
    /// The suspended frame. `None` while the frame is executing, since the
    /// driver holds it while priming or resuming.
    frame: Option<F>,

    /// Frames handed out to this frame by reentrant calls and not yet yielded
    pending: usize,
}

/// LIFO stack of frame slots, mutated only by the driver loop and by reentrant
/// entrypoint calls
#[derive(Debug)]
pub struct CallStack<F> {
    slots: Vec<Slot<F>>,
}

impl<F> CallStack<F> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Push a slot for a frame that is about to execute; returns the new depth
    pub fn push_active(&mut self) -> usize {
        self.slots.push(Slot {
            frame: None,
            pending: 0,
        });
        self.slots.len()
    }

    /// Park the executing frame back in the top slot after it suspended
    pub fn suspend_top(&mut self, frame: F) {
        if let Some(slot) = self.slots.last_mut() {
            debug_assert!(slot.frame.is_none(), "top slot already holds a frame");
            slot.frame = Some(frame);
        }
    }

    /// Take the suspended top frame so the driver can resume it
    pub fn take_top(&mut self) -> Option<F> {
        self.slots.last_mut().and_then(|slot| slot.frame.take())
    }

    /// Remove the top slot, retiring its frame; returns the slot's pending count
    pub fn pop(&mut self) -> Option<usize> {
        self.slots.pop().map(|slot| slot.pending)
    }

    /// Record that the executing frame obtained an un-started frame
    pub fn note_pending(&mut self) {
        if let Some(slot) = self.slots.last_mut() {
            slot.pending += 1;
        }
    }

    /// Record that the executing frame yielded one of its nested calls
    pub fn settle_pending(&mut self) {
        if let Some(slot) = self.slots.last_mut() {
            slot.pending = slot.pending.saturating_sub(1);
        }
    }

    /// Drop every frame, abandoning the call tree
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<F> Default for CallStack<F> {
    fn default() -> Self {
        Self::new()
    }
}
