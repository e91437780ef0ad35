pub mod upload;

pub use upload::{UploadResult, UploadService};
