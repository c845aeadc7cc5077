// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Wires dispatcher, catalog and notification center explicitly
// - Nothing is registered globally; consumers receive what they need
// - Translates failures into UI-facing shapes

pub mod error_handling;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, NotifyOnError, ToErrorResponse};
pub use state::AppState;
