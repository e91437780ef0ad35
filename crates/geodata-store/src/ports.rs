use async_trait::async_trait;
use geodata_core::error::Result;
use geodata_core::models::{FileId, LabeledPoint, PointId, StoredFile, User, UserId};

/// Port for user account storage
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a new user
    async fn store_user(&self, user: &User) -> Result<()>;

    /// Retrieve a user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Port for uploaded file metadata storage
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store file metadata, assigning it a fresh ID
    async fn store_file(&self, file: &StoredFile) -> Result<FileId>;

    /// Retrieve file metadata by ID
    async fn get_file(&self, id: FileId) -> Result<Option<StoredFile>>;

    /// List metadata for all uploaded files
    async fn list_files(&self) -> Result<Vec<StoredFile>>;
}

/// Port for labeled point storage
#[async_trait]
pub trait PointStore: Send + Sync {
    /// Store a single point, assigning it a fresh ID
    async fn store_point(&self, point: &LabeledPoint) -> Result<PointId>;

    /// Store a batch of points, assigning each a fresh ID
    async fn store_points(&self, points: &[LabeledPoint]) -> Result<Vec<PointId>>;

    /// Retrieve a point by ID
    async fn get_point(&self, id: PointId) -> Result<Option<LabeledPoint>>;

    /// List all stored points
    async fn list_points(&self) -> Result<Vec<LabeledPoint>>;
}
