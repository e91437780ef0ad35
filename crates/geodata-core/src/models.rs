pub mod file;
pub mod point;
pub mod user;

pub use file::{FileId, StoredFile};
pub use point::{GeoPoint, LabeledPoint, PointId};
pub use user::{User, UserId};
