//! Current-page highlighting for navigation links.

/// Inline color given to the link that points at the current page.
pub const ACTIVE_LINK_COLOR: &str = "#A0B1A5";

/// Page a URL path refers to: its last segment, or `index.html` for a
/// directory path.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "index.html",
    }
}

pub fn is_current_page(href: Option<&str>, page: &str) -> bool {
    href == Some(page)
}
