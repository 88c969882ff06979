use crate::layout::global_context::{use_tabs, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// One entry of the tab bar: click activates, × closes.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_tabs();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str())));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    // Titles can change after open (detail pages rename themselves).
    let key_for_title = tab.key.clone();
    let title = move || {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key_for_title)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{title}</span>
            <button class="tab-close" on:click=on_close title="閉じる">"×"</button>
        </div>
    }
}
