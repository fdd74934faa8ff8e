//! Integration tests for wv-view.

use std::cell::RefCell;
use std::rc::Rc;

use wv_behavior::{BehaviorDecls, Options};
use wv_core::{DomEvent, Element, EventKey};

use crate::{
    DelegateMap, DomHandler, HookOwner, HookPipeline, View, ViewEmitter, ViewError, ViewHook,
    ViewResult,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Shared log handlers append to, for asserting call order.
type Log = Rc<RefCell<Vec<String>>>;

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn logging_handler(log: &Log, tag: &str) -> DomHandler {
    let log = Rc::clone(log);
    let tag = tag.to_string();
    Rc::new(move |_view: &mut View, _ev: &DomEvent| {
        log.borrow_mut().push(tag.clone());
        Ok(())
    })
}

/// Hook contributing one delegation entry and logging element swaps.
struct EntryHook {
    key: &'static str,
    tag: &'static str,
    log: Log,
}

impl ViewHook for EntryHook {
    fn delegate_entries(&self, _view: &mut View) -> ViewResult<Vec<(EventKey, DomHandler)>> {
        Ok(vec![(
            EventKey::parse(self.key).unwrap(),
            logging_handler(&self.log, self.tag),
        )])
    }

    fn element_set(&self, view: &mut View) -> ViewResult<()> {
        let selector = view
            .element()
            .map(|e| e.selector.clone())
            .unwrap_or_default();
        self.log.borrow_mut().push(format!("element_set:{selector}"));
        Ok(())
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod emitter_tests {
    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let log = log();
        let mut em = ViewEmitter::new();
        let l1 = Rc::clone(&log);
        em.on("ev", move |_, _| l1.borrow_mut().push("one".into()));
        let l2 = Rc::clone(&log);
        em.on("ev", move |_, _| l2.borrow_mut().push("two".into()));

        let called = em.trigger("ev", &DomEvent::new("ev"));
        assert_eq!(called, 2);
        assert_eq!(*log.borrow(), vec!["one", "two"]);
    }

    #[test]
    fn off_removes_exactly_the_listener() {
        let mut em = ViewEmitter::new();
        let a = em.on("ev", |_, _| {});
        let _b = em.on("ev", |_, _| {});

        assert!(em.off(a));
        assert!(!em.off(a));
        assert_eq!(em.listener_count("ev"), 1);
    }

    #[test]
    fn trigger_passes_event_name_and_payload() {
        let log = log();
        let mut em = ViewEmitter::new();
        let l = Rc::clone(&log);
        em.on("menu:open", move |event, ev| {
            l.borrow_mut()
                .push(format!("{event} on {}", ev.target().unwrap_or("?")));
        });

        em.trigger("menu:open", &DomEvent::at("click", ".trigger"));
        assert_eq!(*log.borrow(), vec!["menu:open on .trigger"]);
    }

    #[test]
    fn trigger_without_listeners_returns_zero() {
        let em = ViewEmitter::new();
        assert_eq!(em.trigger("nothing", &DomEvent::new("x")), 0);
    }
}

// ── Delegation table ──────────────────────────────────────────────────────────

#[cfg(test)]
mod delegate_tests {
    use super::*;

    #[test]
    fn same_key_replaces_in_place() {
        let log = log();
        let mut map = DelegateMap::new();
        map.insert(
            EventKey::parse("click .a").unwrap(),
            logging_handler(&log, "first"),
        );
        map.insert(
            EventKey::parse("click .a").unwrap(),
            logging_handler(&log, "second"),
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn distinct_namespaces_coexist() {
        let log = log();
        let mut map = DelegateMap::new();
        map.insert(
            EventKey::parse("click.ns1 .a").unwrap(),
            logging_handler(&log, "one"),
        );
        map.insert(
            EventKey::parse("click.ns2 .a").unwrap(),
            logging_handler(&log, "two"),
        );

        assert_eq!(map.len(), 2);
        // Namespaces never affect matching.
        let matched = map.matching(&DomEvent::at("click", ".a"));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn remove_namespace_leaves_other_entries() {
        let log = log();
        let mut map = DelegateMap::new();
        map.insert(
            EventKey::parse("click.mine .a").unwrap(),
            logging_handler(&log, "mine-1"),
        );
        map.insert(
            EventKey::parse("keyup.mine").unwrap(),
            logging_handler(&log, "mine-2"),
        );
        map.insert(
            EventKey::parse("click.theirs .a").unwrap(),
            logging_handler(&log, "theirs"),
        );

        assert_eq!(map.remove_namespace("mine"), 2);
        assert_eq!(map.len(), 1);
        assert!(map.contains(&EventKey::parse("click.theirs .a").unwrap()));
    }

    #[test]
    fn selector_less_key_matches_any_target() {
        let log = log();
        let mut map = DelegateMap::new();
        map.insert(EventKey::parse("click").unwrap(), logging_handler(&log, "any"));

        assert_eq!(map.matching(&DomEvent::new("click")).len(), 1);
        assert_eq!(map.matching(&DomEvent::at("click", ".x")).len(), 1);
        assert_eq!(map.matching(&DomEvent::new("keyup")).len(), 0);
    }
}

// ── Hook pipeline ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    const OWNER_A: HookOwner = HookOwner("a");
    const OWNER_B: HookOwner = HookOwner("b");

    struct Noop;
    impl ViewHook for Noop {}

    #[test]
    fn replace_is_idempotent() {
        let mut p = HookPipeline::new();
        p.replace(OWNER_A, Rc::new(Noop));
        p.replace(OWNER_A, Rc::new(Noop));
        p.replace(OWNER_A, Rc::new(Noop));
        assert_eq!(p.depth(), 1);
    }

    #[test]
    fn remove_pops_only_that_owner() {
        let mut p = HookPipeline::new();
        p.push(OWNER_A, Rc::new(Noop));
        p.push(OWNER_B, Rc::new(Noop));
        p.push(OWNER_A, Rc::new(Noop));

        assert_eq!(p.remove(OWNER_A), 2);
        assert_eq!(p.depth(), 1);
        assert!(p.contains(OWNER_B));
        assert!(!p.contains(OWNER_A));
    }

    #[test]
    fn remove_missing_owner_is_harmless() {
        let mut p = HookPipeline::new();
        assert_eq!(p.remove(OWNER_A), 0);
        assert!(p.is_empty());
    }
}

// ── View ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn build_rejects_malformed_keys() {
        assert!(View::builder().trigger("", "x").build().is_err());
        assert!(View::builder()
            .event("cli&ck .a", |_, _| Ok(()))
            .build()
            .is_err());
    }

    #[test]
    fn build_rejects_unknown_ui_names() {
        let result = View::builder()
            .event("click @ui.missing", |_, _| Ok(()))
            .build();
        assert!(matches!(result, Err(ViewError::Key(_))));
    }

    #[test]
    fn own_event_dispatches_with_ui_expansion() {
        let log = log();
        let l = Rc::clone(&log);
        let mut view = View::builder()
            .ui("btn", ".button")
            .event("click @ui.btn", move |_view, _ev| {
                l.borrow_mut().push("clicked".into());
                Ok(())
            })
            .build()
            .unwrap();

        let ran = view
            .dispatch(&DomEvent::at("click", ".button"))
            .unwrap();
        assert_eq!(ran, 1);
        assert_eq!(*log.borrow(), vec!["clicked"]);
    }

    #[test]
    fn own_trigger_reemits_view_event() {
        let mut view = View::builder()
            .trigger("click .item", "item:chosen")
            .build()
            .unwrap();
        let log = log();
        let l = Rc::clone(&log);
        view.on("item:chosen", move |event, ev| {
            l.borrow_mut()
                .push(format!("{event}@{}", ev.target().unwrap_or("-")));
        });

        view.dispatch(&DomEvent::at("click", ".item")).unwrap();
        assert_eq!(*log.borrow(), vec!["item:chosen@.item"]);
    }

    #[test]
    fn dispatch_ignores_nonmatching_selector() {
        let log = log();
        let l = Rc::clone(&log);
        let mut view = View::builder()
            .event("click .a", move |_, _| {
                l.borrow_mut().push("a".into());
                Ok(())
            })
            .build()
            .unwrap();

        let ran = view.dispatch(&DomEvent::at("click", ".b")).unwrap();
        assert_eq!(ran, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn hook_entries_follow_the_views_own() {
        let log = log();
        let l = Rc::clone(&log);
        let mut view = View::builder()
            .event("click.own", move |_, _| {
                l.borrow_mut().push("own".into());
                Ok(())
            })
            .build()
            .unwrap();
        view.pipeline_mut().push(
            HookOwner("test"),
            Rc::new(EntryHook {
                key: "click.hooked",
                tag: "hooked",
                log: Rc::clone(&log),
            }),
        );
        view.delegate_all().unwrap();

        view.dispatch(&DomEvent::new("click")).unwrap();
        assert_eq!(*log.borrow(), vec!["own", "hooked"]);
    }

    #[test]
    fn set_element_redelegates_and_notifies_hooks() {
        let log = log();
        let mut view = View::builder().build().unwrap();
        view.pipeline_mut().push(
            HookOwner("test"),
            Rc::new(EntryHook {
                key: "click.hooked",
                tag: "hooked",
                log: Rc::clone(&log),
            }),
        );

        view.set_element(Element::new("div", "#root")).unwrap();

        assert_eq!(view.element().unwrap().selector, "#root");
        assert!(view
            .delegates()
            .contains(&EventKey::parse("click.hooked").unwrap()));
        assert_eq!(*log.borrow(), vec!["element_set:#root"]);
    }

    #[test]
    fn handler_error_aborts_remaining_handlers() {
        let log = log();
        let l1 = Rc::clone(&log);
        let l2 = Rc::clone(&log);
        let mut view = View::builder()
            .event("click.first", move |_, _| {
                l1.borrow_mut().push("first".into());
                Err(ViewError::Handler("boom".into()))
            })
            .event("click.second", move |_, _| {
                l2.borrow_mut().push("second".into());
                Ok(())
            })
            .build()
            .unwrap();

        assert!(view.dispatch(&DomEvent::new("click")).is_err());
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn undelegate_all_empties_the_table() {
        let mut view = View::builder()
            .trigger("click .item", "item:chosen")
            .build()
            .unwrap();
        assert_eq!(view.delegates().len(), 1);

        view.undelegate_all();
        assert!(view.delegates().is_empty());
        assert_eq!(view.dispatch(&DomEvent::at("click", ".item")).unwrap(), 0);
    }

    #[test]
    fn declared_behaviors_factory_sees_the_view() {
        let view = View::builder()
            .behaviors_with(|v| {
                BehaviorDecls::new().declare(format!("For{}", v.id()), Options::new())
            })
            .build()
            .unwrap();

        let decls = view.declared_behaviors();
        assert_eq!(decls.len(), 1);
        assert!(decls.keys().next().unwrap().as_str().starts_with("For"));
    }

    #[test]
    fn view_ids_are_distinct() {
        let a = View::builder().build().unwrap();
        let b = View::builder().build().unwrap();
        assert_ne!(a.id(), b.id());
    }
}
