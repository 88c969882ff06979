use crate::dashboards::d400_dashboard::api;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{order_detail_key, tab_label_for_key};
use crate::shared::api_utils::use_api;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::components::status_badge::status_badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_yen};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::request_scope::RequestScope;
use contracts::dashboards::d400_dashboard::dto::DashboardSummary;
use contracts::shared::status::HasStatusDisplay;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api_client = StoredValue::new(use_api());
    let tabs = use_tabs();
    let scope = StoredValue::new(RequestScope::for_component());

    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let api_client = api_client.get_value();
        set_loading.set(true);
        set_error.set(None);
        scope.get_value().spawn(
            async move { api::fetch_summary(&api_client).await },
            move |result| {
                match result {
                    Ok(data) => set_summary.set(Some(data)),
                    Err(e) => {
                        log::error!("dashboard load failed: {}", e);
                        set_summary.set(None);
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_loading.set(false);
            },
        );
    };

    let stat = move |f: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    let open_order = move |id: i64| {
        let key = order_detail_key(id);
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };

    load();

    view! {
        <PageFrame page_id="d400_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"ダッシュボード"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                        " 更新"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="本日の注文数"
                    icon_name="orders"
                    value=stat(|s| format_count(s.today_orders as i64, "件"))
                />
                <StatCard
                    label="本日の売上"
                    icon_name="yen"
                    value=stat(|s| format_yen(s.today_sales))
                    accent=StatAccent::Success
                />
                <StatCard
                    label="新規顧客数"
                    icon_name="customers"
                    value=stat(|s| format_count(s.new_customers as i64, "人"))
                />
                <StatCard
                    label="配送待ち"
                    icon_name="truck"
                    value=stat(|s| format_count(s.pending_shipments as i64, "件"))
                    accent=StatAccent::Warning
                />
            </div>

            <Show
                when=move || !loading.get() || summary.with(Option::is_some)
                fallback=|| view! {
                    <div class="list-placeholder">
                        <Spinner label="読み込み中..." />
                    </div>
                }
            >
                <div class="dashboard-grid">
                    <section class="detail-card">
                        <h3 class="detail-card__title">"ステータス別注文数"</h3>
                        <ul class="status-summary">
                            {move || summary.get().map(|s| s.status_counts.into_iter().map(|c| {
                                let label = c.status.display().label;
                                view! {
                                    <li class="status-summary__row">
                                        {status_badge(&c.status)}
                                        <span class="status-summary__count" title=label>{c.count}</span>
                                    </li>
                                }
                            }).collect_view())}
                        </ul>
                    </section>

                    <section class="detail-card">
                        <h3 class="detail-card__title">"最近の注文"</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"注文ID"</TableHeaderCell>
                                    <TableHeaderCell>"顧客名"</TableHeaderCell>
                                    <TableHeaderCell>"注文日時"</TableHeaderCell>
                                    <TableHeaderCell>"金額"</TableHeaderCell>
                                    <TableHeaderCell>"ステータス"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || summary.get().map(|s| s.recent_orders.into_iter().map(|o| {
                                    let id = o.id;
                                    let ordered = format_datetime(&o.order_date);
                                    let total = format_yen(o.total_amount);
                                    let customer_name = o.customer_name;
                                    let status = o.status;
                                    view! {
                                        <TableRow on:click=move |_| open_order(id) attr:style="cursor: pointer;">
                                            <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{customer_name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{ordered}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{status_badge(&status)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view())}
                            </TableBody>
                        </Table>
                    </section>
                </div>

                <section class="detail-card">
                    <h3 class="detail-card__title">{icon("alert")} " 在庫アラート"</h3>
                    {move || {
                        let alerts = summary.with(|s| s.as_ref().map(|s| s.stock_alerts.clone()).unwrap_or_default());
                        if alerts.is_empty() {
                            view! { <div class="list-placeholder list-placeholder--empty">"在庫アラートはありません"</div> }.into_any()
                        } else {
                            view! {
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"部品コード"</TableHeaderCell>
                                            <TableHeaderCell>"部品名"</TableHeaderCell>
                                            <TableHeaderCell>"現在庫 / 最小在庫"</TableHeaderCell>
                                            <TableHeaderCell>"在庫状況"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {alerts.into_iter().map(|a| {
                                            let stock = format!("{} / {}", a.current_stock, a.min_stock);
                                            let stock_status = a.stock_status();
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{a.code}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{a.name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{status_badge(&stock_status)}</TableCellLayout></TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            }.into_any()
                        }
                    }}
                </section>
            </Show>
        </PageFrame>
    }
}
