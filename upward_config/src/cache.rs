//! Path-keyed cache guaranteeing at-most-one successful load per path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::ResolveResult;

/// One cache entry: a once-initialised value plus a lock serialising loads.
struct Slot<C> {
    init: Mutex<()>,
    value: OnceLock<Arc<C>>,
}

impl<C> Default for Slot<C> {
    fn default() -> Self {
        Self {
            init: Mutex::new(()),
            value: OnceLock::new(),
        }
    }
}

/// Cache mapping resolved paths to loaded configuration values.
///
/// Entries are inserted on first successful load and never evicted or
/// invalidated; a path observed once keeps its value for the life of the
/// owning resolver, so changes on disk are intentionally not observed.
/// Failed loads leave the slot empty and a later call retries the loader.
pub(crate) struct ConfigCache<C> {
    slots: Mutex<HashMap<PathBuf, Arc<Slot<C>>>>,
}

impl<C> Default for ConfigCache<C> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<C> ConfigCache<C> {
    /// Returns the cached value for `path`, invoking `load` on a miss.
    ///
    /// Callers racing on one path serialise on the slot's init lock: one
    /// invokes `load` while the rest wait, and every caller observes the
    /// same [`Arc`] afterwards.
    pub(crate) fn get_or_load<F>(&self, path: &Path, load: F) -> ResolveResult<Arc<C>>
    where
        F: FnOnce(&Path) -> ResolveResult<C>,
    {
        let slot = self.slot(path);
        if let Some(value) = slot.value.get() {
            return Ok(Arc::clone(value));
        }
        // A poisoned init lock means a previous loader panicked; the slot is
        // still empty, so recover and retry.
        let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = slot.value.get() {
            return Ok(Arc::clone(value));
        }
        let loaded = Arc::new(load(path)?);
        let _ = slot.value.set(Arc::clone(&loaded));
        Ok(loaded)
    }

    fn slot(&self, path: &Path) -> Arc<Slot<C>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(path.to_path_buf()).or_default())
    }
}
