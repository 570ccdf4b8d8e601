use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Resolves to `(page, per_page, offset)` with the configured default
    /// page size and sane bounds.
    pub fn normalize(&self, default_per_page: i64) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(default_per_page).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Exact category filter.
    pub category: Option<String>,
    /// Case-insensitive substring search over name and description.
    pub q: Option<String>,
}

impl ProductQuery {
    // Not a serde flatten: serde_urlencoded cannot deserialize flattened
    // numeric options, so the fields are inlined.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_applies_defaults_and_bounds() {
        let pagination = Pagination::default();
        assert_eq!(pagination.normalize(4), (1, 4, 0));

        let pagination = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(pagination.normalize(4), (1, 100, 0));

        let pagination = Pagination {
            page: Some(2),
            per_page: Some(3),
        };
        assert_eq!(pagination.normalize(4), (2, 3, 3));
    }
}
