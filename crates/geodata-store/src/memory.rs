//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state.

use async_trait::async_trait;
use geodata_core::error::Result;
use geodata_core::models::{FileId, LabeledPoint, PointId, StoredFile, User, UserId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{FileStore, PointStore, UserStore};

/// In-memory implementation of UserStore
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserStore {
    /// Create a new in-memory user store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn store_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().unwrap();
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().unwrap();
        let mut listed: Vec<User> = users.values().cloned().collect();
        // HashMap iteration order is arbitrary; sort for a stable listing
        listed.sort_by_key(|u| u.created_at);
        Ok(listed)
    }
}

/// In-memory implementation of FileStore
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: Arc<RwLock<HashMap<FileId, StoredFile>>>,
    next_id: Arc<RwLock<u64>>,
}

impl MemoryFileStore {
    /// Create a new in-memory file store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn store_file(&self, file: &StoredFile) -> Result<FileId> {
        let mut files = self.files.write().unwrap();
        let mut next_id = self.next_id.write().unwrap();

        let id = FileId(*next_id);
        *next_id += 1;

        let mut file_with_id = file.clone();
        file_with_id.id = id;

        files.insert(id, file_with_id);
        Ok(id)
    }

    async fn get_file(&self, id: FileId) -> Result<Option<StoredFile>> {
        let files = self.files.read().unwrap();
        Ok(files.get(&id).cloned())
    }

    async fn list_files(&self) -> Result<Vec<StoredFile>> {
        let files = self.files.read().unwrap();
        let mut listed: Vec<StoredFile> = files.values().cloned().collect();
        listed.sort_by_key(|f| f.id.0);
        Ok(listed)
    }
}

/// In-memory implementation of PointStore
#[derive(Debug, Clone, Default)]
pub struct MemoryPointStore {
    points: Arc<RwLock<HashMap<PointId, LabeledPoint>>>,
    next_id: Arc<RwLock<u64>>,
}

impl MemoryPointStore {
    /// Create a new in-memory point store
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_locked(
        points: &mut HashMap<PointId, LabeledPoint>,
        next_id: &mut u64,
        point: &LabeledPoint,
    ) -> PointId {
        let id = PointId(*next_id);
        *next_id += 1;

        let mut point_with_id = point.clone();
        point_with_id.id = id;

        points.insert(id, point_with_id);
        id
    }
}

#[async_trait]
impl PointStore for MemoryPointStore {
    async fn store_point(&self, point: &LabeledPoint) -> Result<PointId> {
        let mut points = self.points.write().unwrap();
        let mut next_id = self.next_id.write().unwrap();
        Ok(Self::insert_locked(&mut points, &mut next_id, point))
    }

    async fn store_points(&self, batch: &[LabeledPoint]) -> Result<Vec<PointId>> {
        let mut points = self.points.write().unwrap();
        let mut next_id = self.next_id.write().unwrap();
        Ok(batch
            .iter()
            .map(|point| Self::insert_locked(&mut points, &mut next_id, point))
            .collect())
    }

    async fn get_point(&self, id: PointId) -> Result<Option<LabeledPoint>> {
        let points = self.points.read().unwrap();
        Ok(points.get(&id).cloned())
    }

    async fn list_points(&self) -> Result<Vec<LabeledPoint>> {
        let points = self.points.read().unwrap();
        let mut listed: Vec<LabeledPoint> = points.values().cloned().collect();
        listed.sort_by_key(|p| p.id.0);
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_point(label: &str, lon: f64, lat: f64) -> LabeledPoint {
        LabeledPoint {
            id: PointId(0),
            user_id: None,
            label: label.to_string(),
            lat,
            lon,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn stores_and_retrieves_user() {
        let store = MemoryUserStore::new();
        let user = User::new("ada", "secret", "ada@example.com");

        store.store_user(&user).await.unwrap();

        let retrieved = store.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(retrieved.username, "ada");
        assert_eq!(retrieved.email, "ada@example.com");
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let store = MemoryUserStore::new();
        let missing = store.get_user(uuid::Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn lists_all_users() {
        let store = MemoryUserStore::new();
        store.store_user(&User::new("ada", "pw", "ada@example.com")).await.unwrap();
        store.store_user(&User::new("grace", "pw", "grace@example.com")).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn file_ids_are_monotonic() {
        let store = MemoryFileStore::new();
        let file = StoredFile {
            id: FileId(0),
            user_id: None,
            file_name: "beaches.geojson".to_string(),
            file_type: "GeoJSON".to_string(),
            size_bytes: 512,
            point_count: 3,
            created_at: Utc::now(),
        };

        let first = store.store_file(&file).await.unwrap();
        let second = store.store_file(&file).await.unwrap();

        assert_eq!(first, FileId(0));
        assert_eq!(second, FileId(1));

        let retrieved = store.get_file(second).await.unwrap().unwrap();
        assert_eq!(retrieved.id, second);
        assert_eq!(retrieved.file_name, "beaches.geojson");
    }

    #[tokio::test]
    async fn lists_files_in_id_order() {
        let store = MemoryFileStore::new();
        for name in ["a.kml", "b.kml", "c.kml"] {
            let file = StoredFile {
                id: FileId(0),
                user_id: None,
                file_name: name.to_string(),
                file_type: "KML".to_string(),
                size_bytes: 100,
                point_count: 0,
                created_at: Utc::now(),
            };
            store.store_file(&file).await.unwrap();
        }

        let files = store.list_files().await.unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.kml", "b.kml", "c.kml"]);
    }

    #[tokio::test]
    async fn stores_single_point() {
        let store = MemoryPointStore::new();
        let id = store.store_point(&test_point("Sanur Beach", 115.2625, -8.5069)).await.unwrap();

        let retrieved = store.get_point(id).await.unwrap().unwrap();
        assert_eq!(retrieved.label, "Sanur Beach");
        assert_eq!(retrieved.id, id);
    }

    #[tokio::test]
    async fn batch_store_assigns_sequential_ids() {
        let store = MemoryPointStore::new();
        let batch = vec![
            test_point("a", 0.0, 0.0),
            test_point("b", 1.0, 1.0),
            test_point("c", 2.0, 2.0),
        ];

        let ids = store.store_points(&batch).await.unwrap();
        assert_eq!(ids, vec![PointId(0), PointId(1), PointId(2)]);

        let listed = store.list_points().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2].label, "c");
    }

    #[tokio::test]
    async fn single_and_batch_stores_share_the_id_sequence() {
        let store = MemoryPointStore::new();
        store.store_point(&test_point("first", 0.0, 0.0)).await.unwrap();
        let ids = store.store_points(&[test_point("second", 1.0, 1.0)]).await.unwrap();
        assert_eq!(ids, vec![PointId(1)]);
    }
}
