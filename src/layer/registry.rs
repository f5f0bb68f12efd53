//! Name-keyed registry of terrain layers for one import run.
//!
//! Layers are registered the first time their texture is seen and are never
//! updated or removed afterwards. Registration is idempotent: asking for an
//! existing name returns the handle it already has.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Opaque handle of a registered layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerHandle(pub u32);

/// Metadata stored with a layer on first registration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerMetadata {
    /// Source texture the layer was derived from
    pub texture_path: String,
    /// Asset directory the texture belongs to, empty for the root
    pub asset_directory: String,
}

impl LayerMetadata {
    pub fn new(texture_path: impl Into<String>) -> Self {
        Self {
            texture_path: texture_path.into(),
            asset_directory: String::new(),
        }
    }

    pub fn with_asset_directory(mut self, dir: impl Into<String>) -> Self {
        self.asset_directory = dir.into();
        self
    }
}

/// A registered layer
#[derive(Debug)]
pub struct LayerEntry {
    pub handle: LayerHandle,
    pub name: String,
    pub metadata: LayerMetadata,
}

#[derive(Default)]
struct RegistryInner {
    /// Entries in registration order, indexed by handle
    entries: Vec<Arc<LayerEntry>>,
    /// Name -> handle lookup
    by_name: HashMap<String, LayerHandle>,
}

/// Append-only layer table shared by the decode and assembly stages.
///
/// All access goes through one mutex, so concurrent registrations from
/// different regions serialize.
#[derive(Default)]
pub struct LayerRegistry {
    inner: Mutex<RegistryInner>,
}

impl LayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `name`, registering it first if needed.
    ///
    /// `factory` runs only when `name` is new, and at most once per name.
    pub fn get_or_create<F>(&self, name: &str, factory: F) -> LayerHandle
    where
        F: FnOnce() -> LayerMetadata,
    {
        let mut inner = self.inner.lock().unwrap();
        if let Some(&handle) = inner.by_name.get(name) {
            return handle;
        }

        let handle = LayerHandle(inner.entries.len() as u32);
        let entry = LayerEntry {
            handle,
            name: name.to_string(),
            metadata: factory(),
        };
        log::debug!("Registered layer '{}' as {:?}", name, handle);

        inner.entries.push(Arc::new(entry));
        inner.by_name.insert(name.to_string(), handle);
        handle
    }

    /// Look up a layer by handle
    pub fn get(&self, handle: LayerHandle) -> Option<Arc<LayerEntry>> {
        self.inner.lock().unwrap().entries.get(handle.0 as usize).cloned()
    }

    /// Look up a handle by name without registering
    pub fn find(&self, name: &str) -> Option<LayerHandle> {
        self.inner.lock().unwrap().by_name.get(name).copied()
    }

    /// Name of a registered layer
    pub fn name(&self, handle: LayerHandle) -> Option<String> {
        self.get(handle).map(|entry| entry.name.clone())
    }

    pub fn contains(&self, handle: LayerHandle) -> bool {
        (handle.0 as usize) < self.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all entries in registration order
    pub fn entries(&self) -> Vec<Arc<LayerEntry>> {
        self.inner.lock().unwrap().entries.clone()
    }
}

impl std::fmt::Debug for LayerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerRegistry")
            .field("layers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_get_or_create_is_idempotent() {
        let registry = LayerRegistry::new();
        let calls = AtomicUsize::new(0);
        let factory = || {
            calls.fetch_add(1, Ordering::SeqCst);
            LayerMetadata::new("tileset/grass.png")
        };

        let first = registry.get_or_create("grass", factory);
        let second = registry.get_or_create("grass", factory);

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names_get_distinct_handles() {
        let registry = LayerRegistry::new();
        let grass = registry.get_or_create("grass", LayerMetadata::default);
        let rock = registry.get_or_create("rock", LayerMetadata::default);

        assert_ne!(grass, rock);
        assert_eq!(registry.name(grass).as_deref(), Some("grass"));
        assert_eq!(registry.name(rock).as_deref(), Some("rock"));
        assert_eq!(registry.find("rock"), Some(rock));
        assert_eq!(registry.find("sand"), None);
    }

    #[test]
    fn test_metadata_kept_from_first_registration() {
        let registry = LayerRegistry::new();
        let handle = registry.get_or_create("dirt", || LayerMetadata::new("a/dirt.png"));
        registry.get_or_create("dirt", || LayerMetadata::new("b/dirt.png"));

        let entry = registry.get(handle).unwrap();
        assert_eq!(entry.metadata.texture_path, "a/dirt.png");
    }

    #[test]
    fn test_unknown_handle() {
        let registry = LayerRegistry::new();
        assert!(registry.get(LayerHandle(3)).is_none());
        assert!(!registry.contains(LayerHandle(0)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(LayerRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    registry.get_or_create("snow", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        LayerMetadata::default()
                    })
                })
            })
            .collect();

        let handles: Vec<LayerHandle> = threads.into_iter().map(|t| t.join().unwrap()).collect();
        assert!(handles.iter().all(|&h| h == handles[0]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
