use uuid::Uuid;

use crate::{
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::{PagingInfo, Product},
    response::ApiResponse,
    routes::params::ProductQuery,
    state::AppState,
};

/// Applies the category filter and search, then slices out the requested
/// page. The paging info is computed over the filtered set, not the whole
/// catalog.
pub fn page_products(state: &AppState, query: &ProductQuery) -> (Vec<Product>, PagingInfo) {
    let (page, per_page, offset) = query.pagination().normalize(state.page_size);

    let search = query
        .q
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let filtered: Vec<&Product> = state
        .catalog
        .products()
        .iter()
        .filter(|p| match query.category.as_deref() {
            Some(category) => p.category == category,
            None => true,
        })
        .filter(|p| match search.as_deref() {
            Some(needle) => {
                p.name.to_lowercase().contains(needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(needle))
            }
            None => true,
        })
        .collect();

    let paging = PagingInfo::new(page, per_page, filtered.len() as i64);

    // Out-of-range pages yield an empty slice, never an error.
    let items = filtered
        .into_iter()
        .skip(offset as usize)
        .take(per_page as usize)
        .cloned()
        .collect();

    (items, paging)
}

pub fn list_products(state: &AppState, query: &ProductQuery) -> ApiResponse<ProductList> {
    let (items, paging) = page_products(state, query);
    ApiResponse::success("Products", ProductList { items }, Some(paging.into()))
}

pub fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = state.catalog.find(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}
