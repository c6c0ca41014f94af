use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::domain::model::Catalog;

/// A catalog slot that can be replaced atomically while estimates are in
/// flight. Readers take a snapshot with `load`; in-flight calculations keep
/// the snapshot they started with, so they always see a consistent catalog.
/// Entries are never mutated in place.
pub struct SharedCatalog {
    inner: ArcSwap<Catalog>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: ArcSwap::from_pointee(catalog),
        }
    }

    pub fn load(&self) -> Arc<Catalog> {
        self.inner.load_full()
    }

    pub fn replace(&self, catalog: Catalog) {
        self.inner.store(Arc::new(catalog));
    }
}
