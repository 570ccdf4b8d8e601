use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartView},
    error::AppResult,
    middleware::session::CartSession,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart).post(add_to_cart).delete(clear_cart))
        .route("/{product_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("X-Cart-Id" = Option<Uuid>, Header, description = "Cart id; a fresh one is minted when absent"),
    ),
    responses(
        (status = 200, description = "Cart lines and total", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    session: CartSession,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::view_cart(&state, session.cart_id))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    params(
        ("X-Cart-Id" = Option<Uuid>, Header, description = "Cart id; a fresh one is minted when absent"),
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or merge a cart line", body = ApiResponse<CartView>),
        (status = 400, description = "Unknown product or non-positive quantity"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: CartSession,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::add_to_cart(
        &state,
        session.cart_id,
        payload,
    )?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("X-Cart-Id" = Option<Uuid>, Header, description = "Cart id"),
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Line removed; removing an absent line is a no-op", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    session: CartSession,
    Path(product_id): Path<Uuid>,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::remove_from_cart(
        &state,
        session.cart_id,
        product_id,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    params(
        ("X-Cart-Id" = Option<Uuid>, Header, description = "Cart id"),
    ),
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: CartSession,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::clear_cart(&state, session.cart_id))
}
