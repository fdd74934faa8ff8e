//! Constructor lookup: how declaration keys find their behavior types.

use std::collections::HashMap;

use wv_core::BehaviorKey;

use crate::decl::{BehaviorCtor, Options};

/// Caller-supplied capability mapping declaration keys to constructors.
///
/// Resolution consults the lookup for every declaration that carries no
/// explicit constructor.  The lookup is passed to each resolution call —
/// there is no global registration point — so two views in one process can
/// resolve the same key to different types.
///
/// `options` is the declaring site's options bag, for lookups that pick a
/// constructor based on configuration; most implementations ignore it.
pub trait BehaviorLookup {
    fn lookup(&self, options: &Options, key: &BehaviorKey) -> Option<BehaviorCtor>;
}

/// Name-keyed constructor table — the standard [`BehaviorLookup`].
///
/// ```rust,ignore
/// let registry = BehaviorRegistry::new()
///     .with("Tooltip", BehaviorCtor::of(Tooltip::from_options))
///     .with("Logger",  BehaviorCtor::of(|_, _| Logger::default()));
/// ```
#[derive(Clone, Default)]
pub struct BehaviorRegistry {
    entries: HashMap<BehaviorKey, BehaviorCtor>,
}

impl BehaviorRegistry {
    pub fn new() -> BehaviorRegistry {
        BehaviorRegistry::default()
    }

    /// Builder-style [`register`][Self::register].
    pub fn with(mut self, key: impl Into<BehaviorKey>, ctor: BehaviorCtor) -> BehaviorRegistry {
        self.register(key, ctor);
        self
    }

    /// Register `key → ctor`, replacing any previous registration.
    pub fn register(&mut self, key: impl Into<BehaviorKey>, ctor: BehaviorCtor) {
        self.entries.insert(key.into(), ctor);
    }

    pub fn contains(&self, key: &BehaviorKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BehaviorLookup for BehaviorRegistry {
    fn lookup(&self, _options: &Options, key: &BehaviorKey) -> Option<BehaviorCtor> {
        self.entries.get(key).cloned()
    }
}
