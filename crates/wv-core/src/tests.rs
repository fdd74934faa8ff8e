//! Unit tests for wv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BehaviorKey, ViewId};

    #[test]
    fn fresh_ids_are_distinct_and_increasing() {
        let a = ViewId::fresh();
        let b = ViewId::fresh();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn display() {
        assert_eq!(ViewId(7).to_string(), "v7");
        assert_eq!(BehaviorKey::new("Tooltip").to_string(), "Tooltip");
    }

    #[test]
    fn key_conversions() {
        let a: BehaviorKey = "Tooltip".into();
        let b = BehaviorKey::new(String::from("Tooltip"));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Tooltip");
    }
}

#[cfg(test)]
mod key {
    use crate::{EventKey, UiMap};

    #[test]
    fn parse_event_only() {
        let key = EventKey::parse("click").unwrap();
        assert_eq!(key.event(), "click");
        assert_eq!(key.namespace(), None);
        assert_eq!(key.selector(), None);
    }

    #[test]
    fn parse_event_and_selector() {
        let key = EventKey::parse("click .btn").unwrap();
        assert_eq!(key.event(), "click");
        assert_eq!(key.selector(), Some(".btn"));
    }

    #[test]
    fn parse_multi_word_selector() {
        let key = EventKey::parse("click .menu .item").unwrap();
        assert_eq!(key.event(), "click");
        assert_eq!(key.selector(), Some(".menu .item"));
    }

    #[test]
    fn parse_namespaced() {
        let key = EventKey::parse("click.myns .btn").unwrap();
        assert_eq!(key.event(), "click");
        assert_eq!(key.namespace(), Some("myns"));
        assert_eq!(key.selector(), Some(".btn"));
    }

    #[test]
    fn malformed_keys_fail_fast() {
        assert!(EventKey::parse("").is_err());
        assert!(EventKey::parse("   ").is_err());
        assert!(EventKey::parse(".ns").is_err());
        assert!(EventKey::parse("click.").is_err());
        assert!(EventKey::parse("cli&ck .btn").is_err());
    }

    #[test]
    fn display_round_trips() {
        for raw in ["click", "click .btn", "click.ns .menu .item"] {
            assert_eq!(EventKey::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn with_namespace_renders_between_event_and_selector() {
        let key = EventKey::parse("click .btn")
            .unwrap()
            .with_namespace("behaviortriggers0");
        assert_eq!(key.to_string(), "click.behaviortriggers0 .btn");
    }

    #[test]
    fn matching_ignores_namespace() {
        let key = EventKey::parse("click .btn").unwrap().with_namespace("ns");
        assert!(key.matches("click", Some(".btn")));
        assert!(!key.matches("click", Some(".other")));
        assert!(!key.matches("click", None));
        assert!(!key.matches("keyup", Some(".btn")));
    }

    #[test]
    fn selectorless_key_matches_any_target() {
        let key = EventKey::parse("click").unwrap();
        assert!(key.matches("click", None));
        assert!(key.matches("click", Some(".anything")));
    }

    #[test]
    fn expand_ui_resolves_selector() {
        let ui = UiMap::new().with("box", ".box");
        let key = EventKey::parse("click @ui.box").unwrap().expand_ui(&ui).unwrap();
        assert_eq!(key.selector(), Some(".box"));
        assert_eq!(key.to_string(), "click .box");
    }

    #[test]
    fn expand_ui_without_selector_is_identity() {
        let ui = UiMap::new();
        let key = EventKey::parse("click").unwrap().expand_ui(&ui).unwrap();
        assert_eq!(key.to_string(), "click");
    }
}

#[cfg(test)]
mod ui {
    use crate::UiMap;

    #[test]
    fn insert_replaces_in_place() {
        let mut ui = UiMap::new();
        ui.insert("box", ".box");
        ui.insert("tip", ".tip");
        ui.insert("box", ".box-v2");
        assert_eq!(ui.len(), 2);
        assert_eq!(ui.selector("box"), Some(".box-v2"));
        // Order preserved: box was inserted first and stays first.
        let names: Vec<&str> = ui.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["box", "tip"]);
    }

    #[test]
    fn merged_over_shadows_base() {
        let view = UiMap::new().with("box", ".view-box").with("save", ".save");
        let behavior = UiMap::new().with("box", ".b-box").with("tip", ".tip");
        let merged = behavior.merged_over(&view);
        assert_eq!(merged.selector("box"), Some(".b-box"));
        assert_eq!(merged.selector("save"), Some(".save"));
        assert_eq!(merged.selector("tip"), Some(".tip"));
        let names: Vec<&str> = merged.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["box", "save", "tip"]);
    }

    #[test]
    fn expand_without_marker_is_identity() {
        let ui = UiMap::new().with("box", ".box");
        assert_eq!(ui.expand(".raw .selector").unwrap(), ".raw .selector");
    }

    #[test]
    fn expand_single_reference() {
        let ui = UiMap::new().with("box", ".box");
        assert_eq!(ui.expand("@ui.box").unwrap(), ".box");
    }

    #[test]
    fn expand_reference_with_trailing_selector() {
        let ui = UiMap::new().with("menu", ".menu");
        assert_eq!(ui.expand("@ui.menu .item").unwrap(), ".menu .item");
    }

    #[test]
    fn expand_multiple_references() {
        let ui = UiMap::new().with("a", ".a").with("b", ".b");
        assert_eq!(ui.expand("@ui.a > @ui.b").unwrap(), ".a > .b");
    }

    #[test]
    fn expand_unknown_name_fails() {
        let ui = UiMap::new().with("box", ".box");
        let err = ui.expand("@ui.missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}

#[cfg(test)]
mod event {
    use crate::DomEvent;

    #[test]
    fn constructors() {
        let ev = DomEvent::new("click");
        assert_eq!(ev.name, "click");
        assert_eq!(ev.target(), None);

        let ev = DomEvent::at("click", ".btn").with_detail(3);
        assert_eq!(ev.target(), Some(".btn"));
        assert_eq!(ev.detail.as_ref().and_then(|d| d.as_i64()), Some(3));
    }

    #[test]
    fn display() {
        assert_eq!(DomEvent::new("click").to_string(), "click");
        assert_eq!(DomEvent::at("click", ".btn").to_string(), "click @ .btn");
    }
}
