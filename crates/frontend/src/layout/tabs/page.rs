//! Wrapper showing or hiding one tab's page.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the tab's page once and toggles `tabs__item--hidden` with activity.
///
/// The page stays mounted while the tab is open, so its state survives
/// switching tabs and its request scope closes with the tab.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()));

    log!("TabPage mounted: '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log!("TabPage unmounted: '{}'", key_for_cleanup));

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
