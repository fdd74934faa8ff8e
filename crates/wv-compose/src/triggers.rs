//! DOM → view-event trigger wiring.
//!
//! A trigger declaration `"click .btn" → "menu:open"` becomes a delegation
//! entry whose handler re-emits `"menu:open"` through the view's emitter.
//! Each behavior's keys are namespaced by its position in the flattened
//! list, so identical declarations from different behaviors (or the view's
//! own) never collide in the delegation table.

use wv_behavior::{Behavior, BehaviorHandle};
use wv_core::{EventKey, WeaveResult};
use wv_view::{DomHandler, View};

/// Namespace tag for the behavior at flattened position `i`.
fn trigger_namespace(index: usize) -> String {
    format!("behaviortriggers{index}")
}

/// Build the merged trigger entries for a flattened behavior list.
///
/// `@ui.` references in trigger keys see only the declaring behavior's own
/// UI table — unlike event keys, which also see the view's.
pub fn build_trigger_entries(
    view:      &View,
    behaviors: &[BehaviorHandle],
) -> WeaveResult<Vec<(EventKey, DomHandler)>> {
    let mut entries = Vec::new();
    for (i, handle) in behaviors.iter().enumerate() {
        let behavior = handle.borrow();
        let ui = behavior.ui();
        let triggers = behavior.triggers();
        for (raw, view_event) in triggers.iter() {
            let key = EventKey::parse(raw)?
                .with_namespace(trigger_namespace(i))
                .expand_ui(&ui)?;
            entries.push((key, view.build_view_trigger(view_event)));
        }
    }
    Ok(entries)
}
