use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartView},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

fn cart_view(state: &AppState, cart_id: Uuid) -> CartView {
    // Unknown cart ids read as an empty cart; a session starts empty.
    match state.carts.get(&cart_id) {
        Some(cart) => CartView {
            cart_id,
            lines: cart.lines().to_vec(),
            total: cart.total(),
        },
        None => CartView {
            cart_id,
            lines: Vec::new(),
            total: 0,
        },
    }
}

pub fn view_cart(state: &AppState, cart_id: Uuid) -> ApiResponse<CartView> {
    ApiResponse::success("OK", cart_view(state, cart_id), None)
}

pub fn add_to_cart(
    state: &AppState,
    cart_id: Uuid,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let product = state
        .catalog
        .find(payload.product_id)
        .cloned()
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    state
        .carts
        .entry(cart_id)
        .or_default()
        .add_item(product, payload.quantity);

    tracing::debug!(%cart_id, product_id = %payload.product_id, quantity = payload.quantity, "cart add");

    Ok(ApiResponse::success("OK", cart_view(state, cart_id), None))
}

/// Removing a product that is not in the cart is a no-op; the response is
/// the (possibly unchanged) cart either way.
pub fn remove_from_cart(
    state: &AppState,
    cart_id: Uuid,
    product_id: Uuid,
) -> ApiResponse<CartView> {
    if let Some(mut cart) = state.carts.get_mut(&cart_id) {
        cart.remove_line(product_id);
    }

    tracing::debug!(%cart_id, %product_id, "cart remove");

    ApiResponse::success("Removed from cart", cart_view(state, cart_id), None)
}

pub fn clear_cart(state: &AppState, cart_id: Uuid) -> ApiResponse<CartView> {
    if let Some(mut cart) = state.carts.get_mut(&cart_id) {
        cart.clear();
    }

    tracing::debug!(%cart_id, "cart cleared");

    ApiResponse::success("Cart cleared", cart_view(state, cart_id), None)
}
