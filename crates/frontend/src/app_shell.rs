//! Root components behind the configuration loader.
//!
//! - `AppShell`: the auth gate around everything
//! - `MainLayout`: Shell with the sidebar and the tabbed content area

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_tabs;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Main layout. Syncs tabs with `?active=` and opens the dashboard when nothing else is open.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_tabs();

    // Runs once when the layout is created.
    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab("d400_dashboard", "ダッシュボード");
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Login page or the main layout, depending on the session.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
