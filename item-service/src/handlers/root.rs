use crate::dtos::MessageResponse;
use axum::Json;

pub const WELCOME_MESSAGE: &str = "Hello from Axum! This is your DevOps Pipeline.";

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    ),
    tag = "Root"
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
