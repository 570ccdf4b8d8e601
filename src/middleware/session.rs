use axum::extract::FromRequestParts;
use uuid::Uuid;

use crate::error::AppError;

pub const CART_ID_HEADER: &str = "x-cart-id";

/// Cart session resolved from the `X-Cart-Id` header. When the header is
/// absent a fresh id is minted; handlers echo the id back so the client can
/// carry it on subsequent requests.
#[derive(Debug, Clone, Copy)]
pub struct CartSession {
    pub cart_id: Uuid,
}

impl<S> FromRequestParts<S> for CartSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let cart_id = match parts.headers.get(CART_ID_HEADER) {
            Some(value) => {
                let raw = value
                    .to_str()
                    .map_err(|_| AppError::BadRequest("Invalid X-Cart-Id header".into()))?;
                Uuid::parse_str(raw.trim())
                    .map_err(|_| AppError::BadRequest("Invalid cart id".into()))?
            }
            None => Uuid::new_v4(),
        };

        Ok(CartSession { cart_id })
    }
}
