//! Metadata catalog provider with atomic replacement.

use std::sync::{Arc, RwLock};

use tracing::info;

use forgekit_core::application::MetadataProvider;
use forgekit_core::domain::MetadataSnapshot;

/// A metadata provider whose snapshot can be replaced at runtime.
///
/// Readers clone the current `Arc` under a short read lock; `swap` installs
/// a new snapshot under the write lock. An in-flight resolution keeps its
/// `Arc` alive, so it always sees one snapshot in full, never a mix of two.
pub struct SwappableMetadataProvider {
    inner: RwLock<Arc<MetadataSnapshot>>,
}

impl SwappableMetadataProvider {
    pub fn new(snapshot: MetadataSnapshot) -> Self {
        Self {
            inner: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Install a new snapshot. Returns the one it replaced.
    pub fn swap(&self, snapshot: MetadataSnapshot) -> Arc<MetadataSnapshot> {
        let next = Arc::new(snapshot);
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, next);
        info!("metadata snapshot replaced");
        previous
    }
}

impl MetadataProvider for SwappableMetadataProvider {
    fn snapshot(&self) -> Arc<MetadataSnapshot> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgekit_core::domain::DependencyEntry;

    fn snapshot_with(id: &str) -> MetadataSnapshot {
        MetadataSnapshot::builder()
            .group("core", [DependencyEntry::new(id, "core")])
            .build()
            .unwrap()
    }

    #[test]
    fn held_snapshot_survives_a_swap() {
        let provider = SwappableMetadataProvider::new(snapshot_with("old"));
        let held = provider.snapshot();

        provider.swap(snapshot_with("new"));

        assert!(held.dependency("old").is_some());
        assert!(held.dependency("new").is_none());

        let fresh = provider.snapshot();
        assert!(fresh.dependency("new").is_some());
        assert!(fresh.dependency("old").is_none());
    }

    #[test]
    fn swap_returns_the_previous_snapshot() {
        let provider = SwappableMetadataProvider::new(snapshot_with("old"));
        let previous = provider.swap(snapshot_with("new"));
        assert!(previous.dependency("old").is_some());
    }
}
