//! Request and response bodies for the HTTP surface.

pub mod request;
pub mod response;

pub use request::{ClickRequest, CreateMeasureRequest, CreatePointRequest, CreateUserRequest};
pub use response::{
    DeleteResponse, FileResponse, HealthResponse, MeasureResponse, PointPosition, PointResponse,
    UploadResponse, UserResponse,
};
