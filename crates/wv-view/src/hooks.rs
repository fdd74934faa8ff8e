//! View extension points as an owned middleware pipeline.
//!
//! Instead of rebinding the view's methods to wrapped versions, subsystems
//! push a [`ViewHook`] tagged with their [`HookOwner`]. The view calls every
//! hook at the matching extension point, in push order, and an owner can
//! later remove exactly its own entries to restore the pre-push pipeline.

use std::rc::Rc;

use wv_core::EventKey;

use crate::delegate::DomHandler;
use crate::error::ViewResult;
use crate::view::View;

/// Identifies who installed a pipeline entry.
///
/// Owners are compared by tag, so a subsystem should use one fixed tag for
/// all of its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookOwner(pub &'static str);

impl std::fmt::Display for HookOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Callbacks invoked by [`View`] at its extension points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait ViewHook {
    /// Called while the view rebuilds its delegation table
    /// ([`View::delegate_all`]).  Returned entries are inserted after the
    /// view's own declarations, in the order returned.
    fn delegate_entries(&self, _view: &mut View) -> ViewResult<Vec<(EventKey, DomHandler)>> {
        Ok(Vec::new())
    }

    /// Called after the view's root element changes
    /// ([`View::set_element`]), once delegation has been rebuilt.
    fn element_set(&self, _view: &mut View) -> ViewResult<()> {
        Ok(())
    }
}

/// Ordered pipeline of `(owner, hook)` entries.
#[derive(Default)]
pub struct HookPipeline {
    entries: Vec<(HookOwner, Rc<dyn ViewHook>)>,
}

impl HookPipeline {
    pub fn new() -> HookPipeline {
        HookPipeline::default()
    }

    /// Append a hook.  Does not disturb other owners' entries.
    pub fn push(&mut self, owner: HookOwner, hook: Rc<dyn ViewHook>) {
        self.entries.push((owner, hook));
    }

    /// Remove any existing entries for `owner`, then push `hook`.
    ///
    /// Calling this repeatedly with the same owner leaves exactly one entry,
    /// so an installer may re-run without stacking duplicates.
    pub fn replace(&mut self, owner: HookOwner, hook: Rc<dyn ViewHook>) {
        self.remove(owner);
        self.push(owner, hook);
    }

    /// Remove every entry tagged with `owner`.  Returns the count, leaving
    /// all other owners' entries in their original order.
    pub fn remove(&mut self, owner: HookOwner) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(o, _)| *o != owner);
        before - self.entries.len()
    }

    pub fn contains(&self, owner: HookOwner) -> bool {
        self.entries.iter().any(|(o, _)| *o == owner)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hooks in push order, cloned out so callers can run them while
    /// mutating the view that owns this pipeline.
    pub(crate) fn snapshot(&self) -> Vec<Rc<dyn ViewHook>> {
        self.entries.iter().map(|(_, h)| Rc::clone(h)).collect()
    }
}
