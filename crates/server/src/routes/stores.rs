use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use models::store;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Body of `POST /stores`. A missing `name` counts as empty.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateStoreRequest {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    post, path = "/stores", tag = "stores",
    request_body = CreateStoreRequest,
    responses(
        (status = 200, description = "Created", body = models::store::Model),
        (status = 400, description = "Name is empty", body = crate::errors::ErrorMessage)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStoreRequest>,
) -> Result<Json<store::Model>, JsonApiError> {
    let created = state.stores.create(&input.name).await?;
    info!(id = created.id, name = %created.name, "created store");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/stores/{id}", tag = "stores",
    params(("id" = i32, Path, description = "Store ID")),
    responses(
        (status = 200, description = "OK", body = models::store::Model),
        (status = 400, description = "Store not found", body = crate::errors::ErrorMessage)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<store::Model>, JsonApiError> {
    Ok(Json(state.stores.get_store(id).await?))
}

#[utoipa::path(
    delete, path = "/stores/{id}", tag = "stores",
    params(("id" = i32, Path, description = "Store ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Store not found", body = crate::errors::ErrorMessage)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.stores.delete_store_by_id(id).await?;
    info!(id, "deleted store");
    Ok(StatusCode::NO_CONTENT)
}
