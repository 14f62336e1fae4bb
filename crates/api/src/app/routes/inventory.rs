use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_inventory::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/by-name", get(get_item_by_name))
        .route(
            "/items/:id",
            post(create_item)
                .get(get_item)
                .put(update_item)
                .delete(delete_item),
        )
        .route("/items/:id/combined", get(get_item_combined))
}

pub async fn create_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    match store.create(&id, body.into()) {
        Ok(record) => {
            tracing::info!(item_id = %record.id, "item created");
            (StatusCode::CREATED, Json(dto::ItemResponse::from(record))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    match store.list() {
        Ok(records) => {
            let items: Vec<dto::ItemResponse> =
                records.into_iter().map(dto::ItemResponse::from).collect();
            (
                StatusCode::OK,
                Json(dto::ListItemsResponse {
                    count: items.len(),
                    items,
                }),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match store.get_by_id(&id) {
        Ok(record) => (StatusCode::OK, Json(dto::ItemResponse::from(record))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item_by_name(
    Extension(store): Extension<Arc<InventoryStore>>,
    Query(params): Query<dto::ByNameParams>,
) -> axum::response::Response {
    let name = match params.name {
        Some(name) => name,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_argument",
                "query parameter 'name' is required",
            )
        }
    };

    match store.get_by_name(&name) {
        Ok(record) => (StatusCode::OK, Json(dto::ItemResponse::from(record))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item_combined(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    Query(params): Query<dto::CombinedParams>,
) -> axum::response::Response {
    match store.get_combined(&id, params.name.as_deref()) {
        Ok(record) => (StatusCode::OK, Json(dto::ItemResponse::from(record))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    match store.update(&id, &body.into()) {
        Ok(record) => {
            tracing::info!(item_id = %record.id, "item updated");
            (StatusCode::OK, Json(dto::UpdatedItemResponse::from(record))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match store.delete(&id) {
        Ok(()) => {
            tracing::info!(item_id = %id, "item deleted");
            (
                StatusCode::OK,
                Json(dto::DeleteItemResponse {
                    message: "item deleted successfully".to_string(),
                    item_id: id,
                }),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
