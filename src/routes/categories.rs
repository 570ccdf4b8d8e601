use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{dto::nav::NavMenu, response::ApiResponse, services::nav_service, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuQuery {
    pub selected: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(menu))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("selected" = Option<String>, Query, description = "Currently selected category"),
    ),
    responses(
        (status = 200, description = "Sorted distinct category menu", body = ApiResponse<NavMenu>)
    ),
    tag = "Categories"
)]
pub async fn menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Json<ApiResponse<NavMenu>> {
    Json(nav_service::menu(&state, query.selected))
}
