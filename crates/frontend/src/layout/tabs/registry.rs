//! Tab content registry: the one place mapping `tab.key` to a page.

use crate::dashboards::d400_dashboard::ui::DashboardPage;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_item::ui::list::ItemList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::domain::a005_order::ui::list::OrderList;
use crate::domain::a005_order::ui::wizard::OrderWizard;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::ui::SettingsPage;
use crate::usecases::u501_excel_sync::view::ExcelSyncPage;
use crate::usecases::u502_access_sync::view::AccessSyncPage;
use leptos::logging::log;
use leptos::prelude::*;

use super::tab_labels::{order_detail_id, ORDER_NEW_KEY};

/// Renders the page for a tab key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "d400_dashboard" => view! { <DashboardPage /> }.into_any(),
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_supplier" => view! { <SupplierList /> }.into_any(),
        "a003_item" => view! { <ItemList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_order" => view! { <OrderList /> }.into_any(),
        ORDER_NEW_KEY => view! {
            <OrderWizard on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close)) />
        }
        .into_any(),
        k if order_detail_id(k).is_some() => match order_detail_id(k) {
            Some(id) => view! {
                <OrderDetails
                    id=id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any(),
            None => unknown_tab(k),
        },
        "d401_reports" => view! { <ReportsPage /> }.into_any(),
        "u501_excel_sync" => view! { <ExcelSyncPage /> }.into_any(),
        "u502_access_sync" => view! { <AccessSyncPage /> }.into_any(),
        "sys_settings" => view! { <SettingsPage /> }.into_any(),
        other => unknown_tab(other),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log!("unknown tab key: {}", key);
    let text = format!("ページが見つかりません: {}", key);
    view! { <div class="alert alert--error">{text}</div> }.into_any()
}
