//! DOM event payloads.

use std::fmt;

/// An event delivered to delegated handlers.
///
/// `target` is the selector the event was dispatched at — the headless
/// counterpart of the DOM node a real event bubbles from.  `detail` carries
/// whatever free-form payload the dispatcher attached (custom events, test
/// fixtures); handlers that don't care simply ignore it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomEvent {
    pub name:   String,
    pub target: Option<String>,
    pub detail: Option<serde_json::Value>,
}

impl DomEvent {
    /// An event with no target selector.
    pub fn new(name: impl Into<String>) -> DomEvent {
        DomEvent {
            name:   name.into(),
            target: None,
            detail: None,
        }
    }

    /// An event dispatched at `target`.
    pub fn at(name: impl Into<String>, target: impl Into<String>) -> DomEvent {
        DomEvent {
            name:   name.into(),
            target: Some(target.into()),
            detail: None,
        }
    }

    /// Attach a free-form payload.
    pub fn with_detail(mut self, detail: impl Into<serde_json::Value>) -> DomEvent {
        self.detail = Some(detail.into());
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl fmt::Display for DomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{} @ {target}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
