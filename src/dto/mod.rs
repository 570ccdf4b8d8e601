pub mod cart;
pub mod nav;
pub mod products;
