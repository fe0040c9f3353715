// HTTP API routes
//
// Each submodule handles one surface with its own AppState.

pub mod common;
pub mod controls;
pub mod pages;

// Re-export common types
pub use common::{ApiError, ErrorResponse, StatusResponse};
