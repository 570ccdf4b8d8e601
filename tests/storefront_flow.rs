use chrono::Utc;
use sports_store_api::{
    catalog::Catalog,
    dto::cart::AddToCartRequest,
    error::AppError,
    models::Product,
    routes::params::ProductQuery,
    services::{cart_service, nav_service, product_service},
    state::AppState,
};
use uuid::Uuid;

fn product(name: &str, price: i64, category: &str) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        price,
        category: category.to_string(),
        created_at: Utc::now(),
    }
}

fn query(category: Option<&str>, page: i64, per_page: i64) -> ProductQuery {
    ProductQuery {
        page: Some(page),
        per_page: Some(per_page),
        category: category.map(str::to_string),
        q: None,
    }
}

fn five_product_state() -> AppState {
    let catalog = Catalog::new(vec![
        product("P1", 100, "cat1"),
        product("P2", 200, "cat2"),
        product("P3", 300, "cat3"),
        product("P4", 400, "cat2"),
        product("P5", 500, "cat2"),
    ]);
    AppState::new(catalog, 3)
}

#[test]
fn can_paginate() {
    let state = five_product_state();

    let resp = product_service::list_products(&state, &query(None, 2, 3));

    let items = resp.data.expect("product list").items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "P4");
    assert_eq!(items[1].name, "P5");
}

#[test]
fn pagination_meta_reports_totals() {
    let state = five_product_state();

    let resp = product_service::list_products(&state, &query(None, 2, 3));

    let meta = resp.meta.expect("paging meta");
    assert_eq!(meta.page, Some(2));
    assert_eq!(meta.per_page, Some(3));
    assert_eq!(meta.total, Some(5));
    assert_eq!(meta.total_pages, Some(2));
}

#[test]
fn out_of_range_page_is_empty() {
    let state = five_product_state();

    let resp = product_service::list_products(&state, &query(None, 4, 3));

    assert!(resp.data.expect("product list").items.is_empty());
}

#[test]
fn can_filter_products_by_category() {
    let state = five_product_state();

    let resp = product_service::list_products(&state, &query(Some("cat2"), 1, 3));

    let items = resp.data.expect("product list").items;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|p| p.category == "cat2"));
    assert_eq!(items[0].name, "P2");
    assert_eq!(items[1].name, "P4");

    let meta = resp.meta.expect("paging meta");
    assert_eq!(meta.total, Some(3));
}

#[test]
fn can_search_products() {
    let state = five_product_state();

    let mut q = query(None, 1, 10);
    q.q = Some("p4".to_string());
    let resp = product_service::list_products(&state, &q);

    let items = resp.data.expect("product list").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "P4");
}

#[test]
fn unknown_product_detail_is_not_found() {
    let state = five_product_state();

    let result = product_service::get_product(&state, Uuid::new_v4());

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[test]
fn menu_is_sorted_and_distinct() {
    let catalog = Catalog::new(vec![
        product("P1", 100, "Śliwki"),
        product("P2", 100, "Gruszki"),
        product("P3", 100, "Śliwki"),
        product("P4", 100, "Śliwki"),
        product("P5", 100, "Jabłka"),
        product("P6", 100, "Jabłka"),
    ]);
    let state = AppState::new(catalog, 3);

    let resp = nav_service::menu(&state, None);

    let menu = resp.data.expect("nav menu");
    assert_eq!(menu.categories, vec!["Gruszki", "Jabłka", "Śliwki"]);
    assert_eq!(menu.selected, None);
}

#[test]
fn menu_echoes_selected_category() {
    let state = five_product_state();

    let resp = nav_service::menu(&state, Some("cat2".to_string()));

    let menu = resp.data.expect("nav menu");
    assert_eq!(menu.selected.as_deref(), Some("cat2"));
}

// Flow: add twice to merge, remove, total, clear.
#[test]
fn cart_flow() -> anyhow::Result<()> {
    let state = five_product_state();
    let cart_id = Uuid::new_v4();

    let p1 = state.catalog.products()[0].clone();
    let p2 = state.catalog.products()[1].clone();

    cart_service::add_to_cart(
        &state,
        cart_id,
        AddToCartRequest {
            product_id: p1.id,
            quantity: 1,
        },
    )?;
    cart_service::add_to_cart(
        &state,
        cart_id,
        AddToCartRequest {
            product_id: p2.id,
            quantity: 3,
        },
    )?;
    let resp = cart_service::add_to_cart(
        &state,
        cart_id,
        AddToCartRequest {
            product_id: p1.id,
            quantity: 10,
        },
    )?;

    let view = resp.data.expect("cart view");
    assert_eq!(view.cart_id, cart_id);
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.lines[0].quantity, 11);
    assert_eq!(view.lines[1].quantity, 3);
    // 11 × 100 + 3 × 200
    assert_eq!(view.total, 1700);

    let resp = cart_service::remove_from_cart(&state, cart_id, p1.id);
    let view = resp.data.expect("cart view");
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.total, 600);

    // Removing a product that is not in the cart is a no-op.
    let resp = cart_service::remove_from_cart(&state, cart_id, Uuid::new_v4());
    assert_eq!(resp.data.expect("cart view").lines.len(), 1);

    let resp = cart_service::clear_cart(&state, cart_id);
    let view = resp.data.expect("cart view");
    assert!(view.lines.is_empty());
    assert_eq!(view.total, 0);

    Ok(())
}

#[test]
fn carts_are_isolated_by_id() -> anyhow::Result<()> {
    let state = five_product_state();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let p1 = state.catalog.products()[0].clone();
    cart_service::add_to_cart(
        &state,
        first,
        AddToCartRequest {
            product_id: p1.id,
            quantity: 2,
        },
    )?;

    let resp = cart_service::view_cart(&state, second);
    assert!(resp.data.expect("cart view").lines.is_empty());

    Ok(())
}

#[test]
fn add_rejects_non_positive_quantity() {
    let state = five_product_state();
    let p1 = state.catalog.products()[0].clone();

    let result = cart_service::add_to_cart(
        &state,
        Uuid::new_v4(),
        AddToCartRequest {
            product_id: p1.id,
            quantity: 0,
        },
    );

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[test]
fn add_rejects_unknown_product() {
    let state = five_product_state();

    let result = cart_service::add_to_cart(
        &state,
        Uuid::new_v4(),
        AddToCartRequest {
            product_id: Uuid::new_v4(),
            quantity: 1,
        },
    );

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
