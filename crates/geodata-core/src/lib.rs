//! Geodata Core - domain models, geo math, and the measurement session
//!
//! This crate contains the domain logic of the geodata entry service:
//! validated geographic points, great-circle distance, the click-to-measure
//! state machine, and upload format readers.

pub mod config;
pub mod error;
pub mod formats;
pub mod geo;
pub mod measure;
pub mod models;

pub use error::{GeodataError, Result};
