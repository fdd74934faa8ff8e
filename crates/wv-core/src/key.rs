//! Structured event keys.
//!
//! # Key format
//!
//! Declarations use the `"<event>[.<namespace>] [selector]"` shape:
//!
//! ```text
//! "click"                    event only
//! "click .btn"               event + selector
//! "click.myns .btn"          event + namespace + selector
//! "mouseenter @ui.tip"       selector via @ui shorthand (see `UiMap::expand`)
//! ```
//!
//! Keys are parsed once into an [`EventKey`] and manipulated as fields from
//! then on — namespacing inserts into the `namespace` slot instead of splicing
//! strings, and dispatch matching reads `event`/`selector` directly.  The
//! namespace never participates in matching; it exists so entries from
//! different owners stay distinct in a delegation table and can be removed as
//! a group.

use std::fmt;

use crate::error::{WeaveError, WeaveResult};
use crate::ui::UiMap;

/// A parsed `"<event>[.<namespace>] [selector]"` key.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventKey {
    event:     String,
    namespace: Option<String>,
    selector:  Option<String>,
}

impl EventKey {
    /// A bare event key with no namespace or selector.
    pub fn new(event: impl Into<String>) -> EventKey {
        EventKey {
            event:     event.into(),
            namespace: None,
            selector:  None,
        }
    }

    /// Parse a raw declaration key.
    ///
    /// Fails fast on empty keys, missing event names, empty namespaces, and
    /// event names containing anything outside `[A-Za-z0-9:_-]` — a malformed
    /// declaration would otherwise produce a handler that never fires.
    pub fn parse(raw: &str) -> WeaveResult<EventKey> {
        let malformed = |reason: &'static str| WeaveError::MalformedEventKey {
            key: raw.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(malformed("empty key"));
        }

        let (event_part, selector) = match trimmed.split_once(char::is_whitespace) {
            Some((event_part, rest)) => {
                let rest = rest.trim();
                (event_part, (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (trimmed, None),
        };

        let (event, namespace) = match event_part.split_once('.') {
            Some((_, "")) => return Err(malformed("empty namespace")),
            Some((event, ns)) => (event, Some(ns.to_string())),
            None => (event_part, None),
        };

        if event.is_empty() {
            return Err(malformed("missing event name"));
        }
        if !event
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-'))
        {
            return Err(malformed("invalid character in event name"));
        }

        Ok(EventKey {
            event: event.to_string(),
            namespace,
            selector,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    // ── Transformations ───────────────────────────────────────────────────

    /// Replace the namespace slot, consuming `self`.
    pub fn with_namespace(mut self, ns: impl Into<String>) -> EventKey {
        self.namespace = Some(ns.into());
        self
    }

    /// Replace the selector slot, consuming `self`.
    pub fn with_selector(mut self, selector: impl Into<String>) -> EventKey {
        self.selector = Some(selector.into());
        self
    }

    /// Expand any `@ui.name` references in the selector against `ui`.
    ///
    /// Keys without a selector pass through unchanged.
    pub fn expand_ui(mut self, ui: &UiMap) -> WeaveResult<EventKey> {
        if let Some(selector) = &self.selector {
            self.selector = Some(ui.expand(selector)?);
        }
        Ok(self)
    }

    // ── Matching ──────────────────────────────────────────────────────────

    /// Would an event named `name` dispatched at `target` reach this key?
    ///
    /// A key without a selector matches any target.  Namespaces are ignored:
    /// they disambiguate table entries, not incoming events.
    pub fn matches(&self, name: &str, target: Option<&str>) -> bool {
        if self.event != name {
            return false;
        }
        match &self.selector {
            None => true,
            Some(selector) => target == Some(selector.as_str()),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event)?;
        if let Some(ns) = &self.namespace {
            write!(f, ".{ns}")?;
        }
        if let Some(selector) = &self.selector {
            write!(f, " {selector}")?;
        }
        Ok(())
    }
}
