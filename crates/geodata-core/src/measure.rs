//! Two-point distance measurement session.

pub mod session;

pub use session::{MeasureSession, MeasureSnapshot, SessionState};
