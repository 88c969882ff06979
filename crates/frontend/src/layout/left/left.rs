use crate::layout::global_context::use_tabs;
use leptos::prelude::*;

/// Sidebar zone, hidden when `left_open` is false.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store = use_tabs();
    let is_open = move || tabs_store.left_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
