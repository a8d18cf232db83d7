//! Item handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};

use crate::api::AppState;
use crate::domain::{Identity, Item, ItemInput};
use crate::errors::AppResult;

/// Create item routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_own_items).post(create_item))
        .route("/user/:user_id", get(list_user_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// Enforce ownership of an existing item when the policy asks for it.
async fn authorize(state: &AppState, identity: &Identity, item: &Item) -> AppResult<()> {
    if !state.policy.enforces_item_ownership() {
        return Ok(());
    }
    let caller_id = state.user_service.id_for_username(&identity.username).await?;
    state.policy.check_item_access(&caller_id, item)
}

/// Create an item owned by the caller
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = ItemInput,
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<ItemInput>,
) -> AppResult<Json<Item>> {
    let owner_id = state.user_service.id_for_username(&identity.username).await?;
    let item = state.item_service.create(payload, &owner_id).await?;

    Ok(Json(item))
}

/// List the caller's items
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Caller's items", body = [Item]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_own_items(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Json<Vec<Item>>> {
    let owner_id = state.user_service.id_for_username(&identity.username).await?;
    let items = state.item_service.list_by_owner(&owner_id).await?;

    Ok(Json(items))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(("id" = String, Path, description = "Item id")),
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 403, description = "Item belongs to another user"),
        (status = 404, description = "No such item")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(item) = state.item_service.get_by_id(&id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    authorize(&state, &identity, &item).await?;

    Ok(Json(item).into_response())
}

/// List the items of any user
#[utoipa::path(
    get,
    path = "/items/user/{userId}",
    tag = "Items",
    params(("userId" = String, Path, description = "Owner's user id")),
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Items of the user", body = [Item]),
        (status = 403, description = "Listing another user's items")
    )
)]
pub async fn list_user_items(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Item>>> {
    if state.policy.enforces_item_ownership() {
        let caller_id = state.user_service.id_for_username(&identity.username).await?;
        state.policy.check_owner_listing(&caller_id, &user_id)?;
    }
    let items = state.item_service.list_by_owner(&user_id).await?;

    Ok(Json(items))
}

/// Replace an item's fields
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(("id" = String, Path, description = "Item id")),
    request_body = ItemInput,
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 403, description = "Item belongs to another user"),
        (status = 500, description = "No such item")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(payload): Json<ItemInput>,
) -> AppResult<Json<Item>> {
    if let Some(existing) = state.item_service.get_by_id(&id).await? {
        authorize(&state, &identity, &existing).await?;
    }
    let item = state.item_service.update(&id, payload).await?;

    Ok(Json(item))
}

/// Delete an item; unknown ids are a no-op
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(("id" = String, Path, description = "Item id")),
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 403, description = "Item belongs to another user")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if let Some(existing) = state.item_service.get_by_id(&id).await? {
        authorize(&state, &identity, &existing).await?;
    }
    state.item_service.delete_by_id(&id).await?;

    Ok(StatusCode::OK)
}
