use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use geodata_core::geo::DisplayUnit;
use geodata_core::measure::MeasureSession;
use geodata_store::ports::{FileStore, PointStore, UserStore};
use uuid::Uuid;

/// One live measurement tool: its session plus the unit it displays in.
#[derive(Debug, Clone)]
pub struct MeasureInstance {
    pub session: MeasureSession,
    pub unit: DisplayUnit,
}

/// Registry of live measurement instances keyed by ID.
///
/// All mutation goes through [`with_instance`] under the write lock, so
/// concurrent requests always act on the latest session state rather than
/// a stale copy.
///
/// [`with_instance`]: MeasureRegistry::with_instance
#[derive(Clone, Default)]
pub struct MeasureRegistry {
    instances: Arc<RwLock<HashMap<Uuid, MeasureInstance>>>,
}

impl MeasureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh instance and return its ID with its initial state.
    pub fn create(&self, unit: DisplayUnit) -> (Uuid, MeasureInstance) {
        let id = Uuid::new_v4();
        let instance = MeasureInstance { session: MeasureSession::new(), unit };
        self.instances.write().unwrap().insert(id, instance.clone());
        (id, instance)
    }

    /// Run a closure against the instance identified by `id`.
    ///
    /// Returns `None` if no such instance exists.
    pub fn with_instance<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut MeasureInstance) -> T,
    ) -> Option<T> {
        let mut instances = self.instances.write().unwrap();
        instances.get_mut(&id).map(f)
    }

    /// Read-only copy of the instance identified by `id`.
    pub fn get(&self, id: Uuid) -> Option<MeasureInstance> {
        self.instances.read().unwrap().get(&id).cloned()
    }

    /// Remove the instance identified by `id`.
    ///
    /// Returns whether an instance was removed. Removal drops its click
    /// handling entirely; a deleted instance never records further clicks.
    pub fn remove(&self, id: Uuid) -> bool {
        self.instances.write().unwrap().remove(&id).is_some()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub file_store: Arc<dyn FileStore>,
    pub point_store: Arc<dyn PointStore>,
    pub measures: MeasureRegistry,
}

impl AppState {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        file_store: Arc<dyn FileStore>,
        point_store: Arc<dyn PointStore>,
    ) -> Self {
        Self {
            user_store,
            file_store,
            point_store,
            measures: MeasureRegistry::new(),
        }
    }
}
