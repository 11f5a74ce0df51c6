// File: crates/tally-core/src/frame.rs
// Summary: Single-consumer "next animation frame" queue shared by every chart on a host.
// Notes:
// - The host's event loop (or a test) calls `tick` once per display frame.
// - A tick runs only frames requested before it started; anything requested
//   from inside a callback waits for the next tick.
// - Canceling removes the callback outright, even mid-tick.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Identifies one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(u64);

#[derive(Default)]
struct ClockState {
    next: u64,
    queue: BTreeMap<u64, Box<dyn FnOnce()>>,
    ticks: u64,
}

#[derive(Clone, Default)]
pub struct FrameClock {
    state: Rc<RefCell<ClockState>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_frame(&self, callback: impl FnOnce() + 'static) -> FrameToken {
        let mut st = self.state.borrow_mut();
        let id = st.next;
        st.next += 1;
        st.queue.insert(id, Box::new(callback));
        FrameToken(id)
    }

    /// Returns whether the frame was still pending.
    pub fn cancel_frame(&self, token: FrameToken) -> bool {
        self.state.borrow_mut().queue.remove(&token.0).is_some()
    }

    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.state.borrow().queue.contains_key(&token.0)
    }

    /// Callbacks waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.state.borrow().ticks
    }

    /// Run every frame that was due when the tick began; returns how many ran.
    pub fn tick(&self) -> usize {
        let horizon = {
            let mut st = self.state.borrow_mut();
            st.ticks += 1;
            st.next
        };
        let mut ran = 0;
        loop {
            // borrow released before the callback runs; it may request or cancel frames
            let due = {
                let mut st = self.state.borrow_mut();
                match st.queue.first_key_value() {
                    Some((&id, _)) if id < horizon => st.queue.remove(&id),
                    _ => None,
                }
            };
            match due {
                Some(callback) => {
                    callback();
                    ran += 1;
                }
                None => break,
            }
        }
        ran
    }
}
