use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::ProductList,
    error::AppResult,
    models::Product,
    pager,
    response::ApiResponse,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/pager", get(page_links))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default from config"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("q" = Option<String>, Query, description = "Substring search over name and description"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<ProductList>> {
    Json(product_service::list_products(&state, &query))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(product_service::get_product(&state, id)?))
}

#[utoipa::path(
    get,
    path = "/api/products/pager",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default from config"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("q" = Option<String>, Query, description = "Substring search over name and description"),
    ),
    responses(
        (status = 200, description = "HTML pager fragment for the filtered listing", content_type = "text/html", body = String)
    ),
    tag = "Products"
)]
pub async fn page_links(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Html<String> {
    let (_, paging) = product_service::page_products(&state, &query);
    let html = pager::page_links(&paging, |page| {
        page_url(&query, paging.items_per_page, page)
    });
    Html(html)
}

fn page_url(query: &ProductQuery, per_page: i64, page: i64) -> String {
    let mut url = format!("/api/products?page={page}&per_page={per_page}");
    if let Some(category) = query.category.as_deref() {
        url.push_str("&category=");
        url.push_str(category);
    }
    if let Some(q) = query.q.as_deref() {
        url.push_str("&q=");
        url.push_str(q);
    }
    url
}
