//! Strongly typed identifiers.
//!
//! `ViewId` is allocated from a process-wide counter so every view instance
//! gets a distinct id for its lifetime; the id is embedded in synthesized
//! event namespaces, which is what makes behavior handler keys unique across
//! views.  `BehaviorKey` is the name a behavior is declared under.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

// ── ViewId ────────────────────────────────────────────────────────────────────

static NEXT_VIEW_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique view instance id.
///
/// Displays as `v<n>` ("v1", "v2", …), the form that appears inside
/// synthesized event-key namespaces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u32);

impl ViewId {
    /// Allocate the next unused id.
    pub fn fresh() -> ViewId {
        ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

// ── BehaviorKey ───────────────────────────────────────────────────────────────

/// The name a behavior is declared under.
///
/// Keys identify declaration slots, not instances: the same key occurring at
/// two places in one view's declaration tree resolves to one shared instance.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorKey(pub String);

impl BehaviorKey {
    pub fn new(name: impl Into<String>) -> BehaviorKey {
        BehaviorKey(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BehaviorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BehaviorKey {
    fn from(s: &str) -> BehaviorKey {
        BehaviorKey(s.to_string())
    }
}

impl From<String> for BehaviorKey {
    fn from(s: String) -> BehaviorKey {
        BehaviorKey(s)
    }
}
