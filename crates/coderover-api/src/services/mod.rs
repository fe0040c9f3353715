// Services layer for business logic
// Services own shaping of storage rows into API DTOs, calling storage directly

pub mod control;

pub use control::ControlService;
