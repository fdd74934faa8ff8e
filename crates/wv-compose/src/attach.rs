//! Attach, add, and detach entry points.
//!
//! These are the operations applications call.  All wiring funnels through
//! one [`ViewHook`] installed under [`BEHAVIORS_HOOK`]: the hook contributes
//! the namespaced trigger and event entries for whatever is in the view's
//! behavior slots whenever the view rebuilds delegation, and fans element
//! swaps out to every attached behavior.

use std::rc::Rc;

use wv_behavior::{Behavior, BehaviorDecl, BehaviorDecls, BehaviorLookup, BehaviorTree};
use wv_core::{BehaviorKey, EventKey};
use wv_view::{AttachedBehaviors, DomHandler, HookOwner, View, ViewHook, ViewResult};

use crate::error::ComposeResult;
use crate::events::build_event_entries;
use crate::resolver::resolve;
use crate::triggers::build_trigger_entries;

/// Pipeline owner tag for everything this subsystem installs.
pub const BEHAVIORS_HOOK: HookOwner = HookOwner("behaviors");

struct BehaviorsHook;

impl ViewHook for BehaviorsHook {
    fn delegate_entries(&self, view: &mut View) -> ViewResult<Vec<(EventKey, DomHandler)>> {
        let behaviors = view.behaviors().flat.clone();
        let mut entries = build_trigger_entries(view, &behaviors)?;
        entries.extend(build_event_entries(view, &behaviors)?);
        Ok(entries)
    }

    fn element_set(&self, view: &mut View) -> ViewResult<()> {
        let behaviors = view.behaviors().flat.clone();
        for behavior in &behaviors {
            behavior.borrow_mut().proxy_view_properties(view);
        }
        Ok(())
    }
}

/// Attach the view's declared behaviors.
///
/// Resolves the full tree from the view's declaration source, fills the
/// behavior slots, installs the subsystem hook (replacing any previous
/// installation), and rebuilds delegation.  Returns the flattened behavior
/// count.
pub fn attach_behaviors(
    view:   &mut View,
    lookup: Option<&dyn BehaviorLookup>,
) -> ComposeResult<usize> {
    let decls = view.declared_behaviors();
    let tree = resolve(view, &decls, lookup)?;
    install(view, tree)
}

/// Add (or replace) one behavior on a view after attach.
///
/// The declaration is resolved with a fresh cache and merged into the
/// existing tree: the same key replaces its node, a new key appends.
pub fn add_behavior(
    view:   &mut View,
    key:    impl Into<BehaviorKey>,
    decl:   BehaviorDecl,
    lookup: Option<&dyn BehaviorLookup>,
) -> ComposeResult<usize> {
    let mut single = BehaviorDecls::new();
    single.insert(key.into(), decl);
    let addition = resolve(view, &single, lookup)?;

    let mut tree = view.behaviors().tree.clone();
    tree.merge(addition);
    install(view, tree)
}

/// Remove everything this subsystem installed on `view`.
///
/// Pops the hook, clears the behavior slots, and rebuilds delegation,
/// leaving exactly the view's own entries — the pre-attach state.
pub fn detach_behaviors(view: &mut View) -> ComposeResult<()> {
    view.pipeline_mut().remove(BEHAVIORS_HOOK);
    *view.behaviors_mut() = AttachedBehaviors::default();
    view.delegate_all()?;
    Ok(())
}

fn install(view: &mut View, tree: BehaviorTree) -> ComposeResult<usize> {
    let flat = tree.flatten();
    let count = flat.len();
    *view.behaviors_mut() = AttachedBehaviors { tree, flat };
    view.pipeline_mut()
        .replace(BEHAVIORS_HOOK, Rc::new(BehaviorsHook));
    view.delegate_all()?;
    Ok(count)
}
