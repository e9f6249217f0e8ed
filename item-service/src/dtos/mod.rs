use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello from Axum! This is your DevOps Pipeline.")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "item-service")]
    pub service: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = 3)]
    pub items: usize,
}
