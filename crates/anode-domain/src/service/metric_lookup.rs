//! Blend key to reference metrics

use crate::model::{BlendKey, ReferenceMetrics, ReferenceStore};

/// Resolve a blend key against the store.
///
/// `None` means no record for the key. A record whose NAC is blank is still
/// returned; callers decide what a missing NAC means for them.
pub fn lookup_metrics<'a>(store: &'a ReferenceStore, key: &BlendKey) -> Option<&'a ReferenceMetrics> {
    store.get(&key.lot())
}
