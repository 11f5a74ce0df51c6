// File: crates/tally-core/src/observer.rs
// Summary: Minimal resize-observer registry (attach/detach callbacks, notify a snapshot).

use std::rc::Rc;

pub(crate) type Callback = Rc<dyn Fn()>;

/// Handle for detaching one observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next: u64,
    entries: Vec<(ObserverId, Callback)>,
}

impl Observers {
    pub(crate) fn attach(&mut self, cb: Callback) -> ObserverId {
        let id = ObserverId(self.next);
        self.next += 1;
        self.entries.push((id, cb));
        id
    }

    pub(crate) fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(e, _)| *e != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Callbacks to fire, cloned out so the owner can be released before they run.
    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| Rc::clone(cb)).collect()
    }
}
