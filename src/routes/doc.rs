use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartView},
        nav::NavMenu,
        products::ProductList,
    },
    models::{CartLine, Product},
    response::{ApiResponse, Meta},
    routes::{cart, categories, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::page_links,
        categories::menu,
        cart::view_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
    ),
    components(
        schemas(
            Product,
            CartLine,
            ProductList,
            CartView,
            AddToCartRequest,
            NavMenu,
            params::Pagination,
            params::ProductQuery,
            Meta,
            health::HealthData,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<NavMenu>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Paginated catalog browsing"),
        (name = "Categories", description = "Category navigation menu"),
        (name = "Cart", description = "Session cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
