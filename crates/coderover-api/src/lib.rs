// CodeRover control log server library
// Decision: Shared library for the server binary and its router tests

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Environment-driven server configuration
pub mod config;

// OpenAPI spec generation
pub mod openapi;

// Router assembly and serve loop
pub mod server;

// Services layer
pub mod services;
pub use services::ControlService;

pub use config::ServerConfig;
pub use server::{build_router, serve};
