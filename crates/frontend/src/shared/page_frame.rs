//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! The root element carries `id="{tab_key}--{category}"` (for example
//! `"a001_customer--list"`) and `data-page-category`, so the tab key of any
//! page can be read straight from the DOM.

use leptos::prelude::*;

/// Table with search, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Single record view or form.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Dashboard and report pages.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Integration actions (Excel, Access).
pub const PAGE_CAT_USECASE: &str = "usecase";
/// Settings.
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// `{tab_key}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
