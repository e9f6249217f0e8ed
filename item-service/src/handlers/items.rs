use crate::models::Item;
use crate::services::metrics::record_item_created;
use crate::services::StoreError;
use crate::utils::ValidatedJson;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// List every item in insertion order
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = [Item])
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Fetch one item by id
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = service_core::error::ErrorResponse),
        (status = 422, description = "Identifier is not an integer", body = service_core::error::ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, AppError> {
    let Path(item_id) =
        item_id.map_err(|e| AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text())))?;

    let item = state.store.get(item_id).await.inspect_err(|_| {
        tracing::debug!(item_id = %item_id, "Item lookup missed");
    })?;

    Ok(Json(item))
}

/// Add a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Item with this ID already exists", body = service_core::error::ErrorResponse),
        (status = 422, description = "Body failed schema validation", body = service_core::error::ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Result<impl IntoResponse, AppError> {
    let item_id = item.id;

    let created = state.store.insert(item).await.map_err(|e| {
        if let StoreError::DuplicateId(_) = e {
            tracing::info!(item_id = %item_id, "Rejected duplicate item id");
        }
        AppError::from(e)
    })?;

    record_item_created();
    tracing::info!(item_id = %created.id, name = %created.name, "Item created");

    Ok((StatusCode::CREATED, Json(created)))
}
