use std::fmt::Write;

use crate::models::PagingInfo;

/// Renders one anchor tag per page, marking the current page. The class
/// lists and attribute order are a compatibility contract with existing
/// storefront views.
pub fn page_links(paging: &PagingInfo, url_for: impl Fn(i64) -> String) -> String {
    let mut html = String::new();
    for page in 1..=paging.total_pages() {
        let class = if page == paging.current_page {
            "btn btn-default btn-primary selected"
        } else {
            "btn btn-default"
        };
        // String::write_fmt is infallible.
        let _ = write!(
            html,
            r#"<a class="{class}" href="{href}">{page}</a>"#,
            href = url_for(page),
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_generate_page_links() {
        let paging = PagingInfo::new(2, 10, 28);

        let result = page_links(&paging, |i| format!("Page{i}"));

        assert_eq!(
            result,
            r#"<a class="btn btn-default" href="Page1">1</a>"#.to_string()
                + r#"<a class="btn btn-default btn-primary selected" href="Page2">2</a>"#
                + r#"<a class="btn btn-default" href="Page3">3</a>"#
        );
    }

    #[test]
    fn single_page_renders_one_selected_link() {
        let paging = PagingInfo::new(1, 10, 4);

        let result = page_links(&paging, |i| format!("/products?page={i}"));

        assert_eq!(
            result,
            r#"<a class="btn btn-default btn-primary selected" href="/products?page=1">1</a>"#
        );
    }

    #[test]
    fn no_items_renders_no_links() {
        let paging = PagingInfo::new(1, 10, 0);
        assert!(page_links(&paging, |i| format!("Page{i}")).is_empty());
    }
}
