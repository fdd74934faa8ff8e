//! menu — smallest example for the weave behavior framework.
//!
//! Wires two behaviors onto a headless menu view: a `Tooltip` that reacts to
//! hover events and a `ClickCounter` that tallies item clicks in typed state.
//! Both declare a shared `Shortcuts` child, so resolution constructs it once
//! and wires it once.  DOM activity is simulated by dispatching events at the
//! view; swap the dispatch calls for a real event source to drive actual UI.

use std::any::Any;

use anyhow::Result;
use serde_json::json;

use wv_behavior::{
    Behavior, BehaviorCtor, BehaviorDecls, BehaviorError, BehaviorRegistry, BehaviorResult,
    EventDecls, Options, TriggerDecls, ViewHost,
};
use wv_compose::{attach_behaviors, detach_behaviors};
use wv_core::{DomEvent, Element, UiMap};
use wv_view::View;

// ── Behavior declarations ─────────────────────────────────────────────────────

// Keys and options as an application would keep them in a config file;
// constructors come from the registry below.
const BEHAVIOR_JSON: &str = r#"{
    "Tooltip":      { "text": "Open the file menu" },
    "ClickCounter": {}
}"#;

// ── Tooltip ───────────────────────────────────────────────────────────────────

/// Shows `text` while the pointer rests on the tooltip anchor.
struct Tooltip {
    text: String,
}

impl Behavior for Tooltip {
    fn ui(&self) -> UiMap {
        UiMap::new().with("tip", ".menu-tooltip")
    }

    fn events(&self) -> EventDecls {
        EventDecls::new()
            .method("mouseenter @ui.tip", "show")
            .method("mouseleave @ui.tip", "hide")
    }

    fn behaviors(&self) -> BehaviorDecls {
        BehaviorDecls::new().declare("Shortcuts", Options::new())
    }

    fn invoke(
        &mut self,
        method: &str,
        view:   &mut dyn ViewHost,
        ev:     &DomEvent,
    ) -> BehaviorResult<()> {
        match method {
            "show" => {
                println!("  [tooltip] show {:?}", self.text);
                view.emit("tooltip:shown", ev);
                Ok(())
            }
            "hide" => {
                println!("  [tooltip] hide");
                view.emit("tooltip:hidden", ev);
                Ok(())
            }
            other => Err(BehaviorError::UnknownHandler {
                method: other.into(),
            }),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── ClickCounter ──────────────────────────────────────────────────────────────

/// Tallies clicks on menu items; the count lives in the behavior instance.
#[derive(Default)]
struct ClickCounter {
    clicks: usize,
}

impl Behavior for ClickCounter {
    fn events(&self) -> EventDecls {
        EventDecls::new().func("click .menu-item", |behavior, view, ev| {
            let counter = behavior
                .as_any_mut()
                .downcast_mut::<ClickCounter>()
                .expect("handler bound to a ClickCounter");
            counter.clicks += 1;
            let item = ev
                .detail
                .as_ref()
                .and_then(|d| d.get("item"))
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            println!("  [counter] click #{} on {item:?}", counter.clicks);
            view.emit("menu:counted", ev);
            Ok(())
        })
    }

    fn behaviors(&self) -> BehaviorDecls {
        BehaviorDecls::new().declare("Shortcuts", Options::new())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── Shortcuts ─────────────────────────────────────────────────────────────────

/// Keyboard access.  Declared by both parents, constructed once.
struct Shortcuts;

impl Behavior for Shortcuts {
    fn triggers(&self) -> TriggerDecls {
        TriggerDecls::new().map("keydown", "menu:key")
    }

    fn proxy_view_properties(&mut self, view: &dyn ViewHost) {
        let at = view
            .element()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "<detached>".into());
        println!("  [shortcuts] now watching {at}");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

fn registry() -> BehaviorRegistry {
    BehaviorRegistry::new()
        .with(
            "Tooltip",
            BehaviorCtor::of(|options: &Options, _: &dyn ViewHost| Tooltip {
                text: options.get_str("text").unwrap_or("(no text)").to_string(),
            }),
        )
        .with(
            "ClickCounter",
            BehaviorCtor::of(|_: &Options, _: &dyn ViewHost| ClickCounter::default()),
        )
        .with(
            "Shortcuts",
            BehaviorCtor::of(|_: &Options, _: &dyn ViewHost| Shortcuts),
        )
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== menu — weave behaviors ===");
    println!();

    // 1. A view for a static menu: one UI name, one view-owned trigger.
    let mut view = View::builder()
        .element(Element::new("nav", "#file-menu"))
        .ui("item", ".menu-item")
        .trigger("click @ui.item", "menu:chosen")
        .behaviors(BehaviorDecls::from_json(BEHAVIOR_JSON)?)
        .build()?;

    // 2. Semantic listeners, as application code would add them.
    view.on("menu:chosen", |event, ev| println!("  [view] {event} ({ev})"));
    view.on("tooltip:shown", |event, _| println!("  [view] {event}"));
    view.on("menu:key", |event, _| println!("  [view] {event}"));

    // 3. Attach: resolve the declarations against the registry, then wire
    //    every behavior's events and triggers under fresh namespaces.
    let registry = registry();
    let count = attach_behaviors(&mut view, Some(&registry))?;
    println!("Attached {count} behaviors; delegation table:");
    for key in view.delegates().keys() {
        println!("  {key}");
    }
    println!();

    // 4. Simulated DOM activity.
    println!("click .menu-item:");
    view.dispatch(&DomEvent::at("click", ".menu-item").with_detail(json!({ "item": "Save" })))?;
    println!("mouseenter .menu-tooltip:");
    view.dispatch(&DomEvent::at("mouseenter", ".menu-tooltip"))?;
    println!("keydown:");
    view.dispatch(&DomEvent::new("keydown"))?;
    println!();

    // 5. Re-bind the view to a fresh root; attached behaviors are told.
    println!("set_element #context-menu:");
    view.set_element(Element::new("nav", "#context-menu"))?;
    println!();

    // 6. Typed state survives in the attached instance.
    let clicks = view
        .behaviors()
        .flat
        .iter()
        .find_map(|h| {
            h.borrow()
                .as_any()
                .downcast_ref::<ClickCounter>()
                .map(|c| c.clicks)
        })
        .unwrap_or(0);
    println!("ClickCounter saw {clicks} click(s)");
    println!();

    // 7. Detach: the table shrinks back to the view's own entries.
    detach_behaviors(&mut view)?;
    println!("Detached; delegation table:");
    for key in view.delegates().keys() {
        println!("  {key}");
    }

    Ok(())
}
