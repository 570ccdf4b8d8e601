pub mod cart_service;
pub mod nav_service;
pub mod product_service;
