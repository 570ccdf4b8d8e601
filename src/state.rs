use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::{catalog::Catalog, models::Cart};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Session carts keyed by cart id. DashMap allows concurrent access
    /// without an external mutex.
    pub carts: Arc<DashMap<Uuid, Cart>>,
    pub page_size: i64,
}

impl AppState {
    pub fn new(catalog: Catalog, page_size: i64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            carts: Arc::new(DashMap::new()),
            page_size,
        }
    }
}
