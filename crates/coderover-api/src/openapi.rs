// OpenAPI specification generation
//
// Served by the server binary through Swagger UI.

use crate::api;
use utoipa::OpenApi;

/// OpenAPI documentation for the CodeRover control log API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::pages::index,
        api::controls::receive_control,
        api::controls::list_logs,
    ),
    components(
        schemas(
            api::controls::ControlRequest,
            api::controls::ControlLogEntry,
            api::common::StatusResponse,
            api::common::ErrorResponse,
        )
    ),
    tags(
        (name = "ui", description = "Joystick UI shell"),
        (name = "controls", description = "Control submission and recent log endpoints")
    ),
    info(
        title = "CodeRover API",
        version = "0.2.0",
        description = "API for recording joystick controls and reading the recent control log",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
