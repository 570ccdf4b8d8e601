use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct NavMenu {
    /// Distinct category names, sorted ascending.
    pub categories: Vec<String>,
    pub selected: Option<String>,
}
