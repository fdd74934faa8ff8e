//! Declaration → instance resolution.
//!
//! Resolution walks a [`BehaviorDecls`] table and produces a
//! [`BehaviorTree`] of live instances: parents are constructed before their
//! children, siblings in declaration order.  A [`DedupCache`] spanning the
//! whole call guarantees each key is instantiated at most once — later
//! occurrences anywhere in the tree reuse the first instance (their own
//! options are ignored) and carry no children, which is also what terminates
//! self-referential declarations.

use std::rc::Rc;

use wv_behavior::{
    Behavior, BehaviorCtor, BehaviorDecl, BehaviorDecls, BehaviorError, BehaviorHandle,
    BehaviorLookup, BehaviorNode, BehaviorTree, ViewHost,
};
use wv_core::BehaviorKey;

use crate::error::ComposeResult;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as CacheMap;
#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as CacheMap;

/// Per-resolution instance cache: the first instantiation of a key wins.
///
/// One cache spans one entry-point call and is dropped with it; caches are
/// never shared between calls or between views.
#[derive(Default)]
pub struct DedupCache {
    seen: CacheMap<BehaviorKey, BehaviorHandle>,
}

impl DedupCache {
    pub fn new() -> DedupCache {
        DedupCache::default()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Resolve `decls` into a tree of live behavior instances.
///
/// Constructor precedence per key: the declaration's explicit constructor,
/// else `lookup`, else [`BehaviorError::MissingLookup`].
pub fn resolve(
    view:   &dyn ViewHost,
    decls:  &BehaviorDecls,
    lookup: Option<&dyn BehaviorLookup>,
) -> ComposeResult<BehaviorTree> {
    let mut cache = DedupCache::new();
    resolve_with_cache(view, decls, lookup, &mut cache)
}

/// [`resolve`], reusing instances already in `cache`.
pub fn resolve_with_cache(
    view:   &dyn ViewHost,
    decls:  &BehaviorDecls,
    lookup: Option<&dyn BehaviorLookup>,
    cache:  &mut DedupCache,
) -> ComposeResult<BehaviorTree> {
    let mut tree = BehaviorTree::new();
    for (key, decl) in decls.iter() {
        let node = resolve_node(view, key, decl, lookup, cache)?;
        tree.insert(key.clone(), node);
    }
    Ok(tree)
}

fn resolve_node(
    view:   &dyn ViewHost,
    key:    &BehaviorKey,
    decl:   &BehaviorDecl,
    lookup: Option<&dyn BehaviorLookup>,
    cache:  &mut DedupCache,
) -> ComposeResult<BehaviorNode> {
    // A key seen earlier in this call reuses the first instance as a leaf;
    // its subtree was already built at the first occurrence.
    if let Some(existing) = cache.seen.get(key) {
        return Ok(BehaviorNode::leaf(Rc::clone(existing)));
    }

    let ctor: BehaviorCtor = match &decl.ctor {
        Some(ctor) => ctor.clone(),
        None => lookup
            .and_then(|l| l.lookup(&decl.options, key))
            .ok_or_else(|| BehaviorError::MissingLookup {
                key: key.to_string(),
            })?,
    };

    let behavior = ctor.construct(&decl.options, view);
    // Register before recursing so a child naming this key hits the cache.
    cache.seen.insert(key.clone(), Rc::clone(&behavior));

    let child_decls = behavior.borrow().behaviors();
    let children = resolve_with_cache(view, &child_decls, lookup, cache)?;

    Ok(BehaviorNode { behavior, children })
}
