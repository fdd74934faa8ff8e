//! Semantic view-event emitter.
//!
//! This is the `on`/`off`/`trigger` surface views expose to application code.
//! DOM events arrive through the delegation table; *view* events — the
//! semantic ones triggers re-emit ("menu:item:chosen") — fan out here.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wv_core::DomEvent;

/// Handle identifying one registered listener, for later removal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

type Listener = Rc<RefCell<dyn FnMut(&str, &DomEvent)>>;

/// Ordered listener table keyed by view event name.
///
/// Listeners registered for the same event run in registration order.
/// `trigger` takes `&self` — listener state lives behind `RefCell`, so
/// emitting never needs structural mutation.
#[derive(Default)]
pub struct ViewEmitter {
    next_id: u64,
    entries: Vec<(String, ListenerId, Listener)>,
}

impl ViewEmitter {
    pub fn new() -> ViewEmitter {
        ViewEmitter::default()
    }

    /// Register `listener` for `event`.  The listener receives the event name
    /// and the originating DOM payload.
    pub fn on<F>(&mut self, event: impl Into<String>, listener: F) -> ListenerId
    where
        F: FnMut(&str, &DomEvent) + 'static,
    {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries
            .push((event.into(), id, Rc::new(RefCell::new(listener))));
        id
    }

    /// Remove the listener registered under `id`.  Returns whether one
    /// existed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(_, lid, _)| *lid != id);
        self.entries.len() != before
    }

    /// Call every listener registered for `event`, in registration order.
    ///
    /// Returns the number of listeners called.
    pub fn trigger(&self, event: &str, payload: &DomEvent) -> usize {
        // Collect first so the table is not borrowed while listeners run.
        let matched: Vec<Listener> = self
            .entries
            .iter()
            .filter(|(name, _, _)| name == event)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in &matched {
            let mut f = listener.borrow_mut();
            (&mut *f)(event, payload);
        }
        matched.len()
    }

    /// Listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.entries.iter().filter(|(name, _, _)| name == event).count()
    }

    /// Total registered listeners across all events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
