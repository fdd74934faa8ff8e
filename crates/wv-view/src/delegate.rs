//! The DOM event delegation table.

use std::rc::Rc;

use wv_core::{DomEvent, EventKey};

use crate::error::ViewResult;
use crate::view::View;

/// A delegated DOM event handler.
///
/// Handlers receive the owning view mutably — they may re-emit view events,
/// swap the element, or touch any other view state — plus the event payload.
pub type DomHandler = Rc<dyn Fn(&mut View, &DomEvent) -> ViewResult<()>>;

/// Ordered `EventKey → DomHandler` table.
///
/// Entries keep insertion order, which is dispatch order for keys matching
/// the same event.  Inserting an identical key (event, namespace, and
/// selector all equal) replaces the handler in place; keys differing only in
/// namespace coexist — that is the whole point of namespacing.
#[derive(Default)]
pub struct DelegateMap {
    entries: Vec<(EventKey, DomHandler)>,
}

impl DelegateMap {
    pub fn new() -> DelegateMap {
        DelegateMap::default()
    }

    /// Add an entry, replacing any entry with an identical key.
    pub fn insert(&mut self, key: EventKey, handler: DomHandler) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((key, handler)),
        }
    }

    /// Remove every entry tagged with namespace `ns`.  Returns the count.
    pub fn remove_namespace(&mut self, ns: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k.namespace() != Some(ns));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Handlers whose key matches `ev`, in insertion order.
    ///
    /// Matching is by event name and selector only; see
    /// [`EventKey::matches`].
    pub fn matching(&self, ev: &DomEvent) -> Vec<DomHandler> {
        self.entries
            .iter()
            .filter(|(k, _)| k.matches(&ev.name, ev.target()))
            .map(|(_, h)| Rc::clone(h))
            .collect()
    }

    pub fn contains(&self, key: &EventKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EventKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
