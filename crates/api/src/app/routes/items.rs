use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryStore, Item, ItemPatch, ItemQuery};

use crate::app::{dto, errors, SharedStore};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/items", get(query_items))
        .route("/items/", get(query_items))
        .route("/items/:item_id", get(get_item).put(update_item))
        .route("/delete/:item_id", delete(delete_item))
}

pub async fn list_items(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let items = store.list();
    tracing::debug!(count = items.len(), "listing items");
    (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response()
}

pub async fn get_item(
    Extension(store): Extension<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
) -> axum::response::Response {
    let id = match path {
        Ok(Path(v)) => ItemId::new(v),
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };

    match store.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn query_items(
    Extension(store): Extension<SharedStore>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> axum::response::Response {
    let query = match query {
        Ok(Query(q)) => q,
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };

    let selection = store.select(&query);
    tracing::debug!(?query, hits = selection.len(), "query items");

    (
        StatusCode::OK,
        Json(dto::QueryResponse {
            query: dto::SelectionEcho::new(query, selection),
        }),
    )
        .into_response()
}

pub async fn create_item(
    Extension(store): Extension<SharedStore>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let item = match body {
        Ok(Json(item)) => item,
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };

    match store.create(item) {
        Ok(added) => (StatusCode::OK, Json(dto::AddedResponse { added })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(store): Extension<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
    patch: Result<Query<ItemPatch>, QueryRejection>,
) -> axum::response::Response {
    let id = match path {
        Ok(Path(v)) => ItemId::new(v),
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };
    let patch = match patch {
        Ok(Query(p)) => p,
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };

    match store.update(id, patch.clone()) {
        Ok(updated) => (
            StatusCode::OK,
            Json(dto::UpdatedResponse {
                query: patch,
                updated,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
) -> axum::response::Response {
    let id = match path {
        Ok(Path(v)) => ItemId::new(v),
        Err(e) => return errors::rejection_to_response(e.status(), e.body_text()),
    };

    match store.delete(id) {
        Ok(deleted) => (StatusCode::OK, Json(dto::DeletedResponse { deleted })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
