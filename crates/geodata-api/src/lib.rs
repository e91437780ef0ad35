//! Geodata API - HTTP surface for the geodata entry service
//!
//! Exposes user and point CRUD, geospatial file upload, and the
//! click-to-measure distance tool over an axum router.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use router::create_router;
pub use state::AppState;
