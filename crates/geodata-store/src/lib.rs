//! Geodata Store - Storage ports and adapters
//!
//! This crate defines storage ports for users, uploaded files, and point
//! features, and provides in-memory adapter implementations.

pub mod memory;
pub mod ports;

pub use memory::{MemoryFileStore, MemoryPointStore, MemoryUserStore};
pub use ports::{FileStore, PointStore, UserStore};
