use crate::{dto::nav::NavMenu, response::ApiResponse, state::AppState};

/// Category navigation menu: distinct names sorted ascending, with the
/// selected category echoed back for highlighting.
pub fn menu(state: &AppState, selected: Option<String>) -> ApiResponse<NavMenu> {
    let data = NavMenu {
        categories: state.catalog.categories(),
        selected,
    };
    ApiResponse::success("Categories", data, None)
}
