use crate::dashboards::d401_reports::api;
use crate::shared::api_utils::use_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::components::status_badge::status_badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListController;
use crate::shared::number_format::{format_count, format_thousands, format_yen};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::request_scope::RequestScope;
use contracts::dashboards::d401_reports::dto::{InventoryRow, SalesReport, INVENTORY_PAGE_SIZE};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let api_client = StoredValue::new(use_api());
    let scope = StoredValue::new(RequestScope::for_component());

    let (report, set_report) = signal(None::<SalesReport>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Inventory rows are paged client-side like any list page.
    let inventory = ListController::<InventoryRow>::new(INVENTORY_PAGE_SIZE);
    let inventory_page = inventory.page();

    let load = move || {
        let api_client = api_client.get_value();
        set_loading.set(true);
        set_error.set(None);
        scope.get_value().spawn(
            async move { api::fetch_sales_report(&api_client).await },
            move |result| {
                match result {
                    Ok(data) => {
                        inventory.state.update(|s| s.finish_ok(data.inventory.clone()));
                        set_report.set(Some(data));
                    }
                    Err(e) => {
                        inventory.state.update(|s| s.finish_err(e.to_string()));
                        set_report.set(None);
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_loading.set(false);
            },
        );
    };

    let stat = move |f: fn(&SalesReport) -> String| {
        Signal::derive(move || report.with(|r| r.as_ref().map(f)))
    };

    load();

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("reports")}
                    <h1 class="page__title">"レポート"</h1>
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
                    label="総売上"
                    icon_name="yen"
                    value=stat(|r| format_yen(r.total_revenue))
                    accent=StatAccent::Success
                />
                <StatCard
                    label="総注文数"
                    icon_name="orders"
                    value=stat(|r| format_count(r.total_orders as i64, "件"))
                />
                <StatCard
                    label="平均注文額"
                    icon_name="reports"
                    value=stat(|r| format_yen(r.average_order_value))
                />
            </div>

            <Show
                when=move || report.with(Option::is_some)
                fallback=move || loading.get().then(|| view! {
                    <div class="list-placeholder">
                        <Spinner label="読み込み中..." />
                    </div>
                })
            >
                <div class="dashboard-grid">
                    <section class="detail-card">
                        <h3 class="detail-card__title">"日別売上"</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"日付"</TableHeaderCell>
                                    <TableHeaderCell>"売上"</TableHeaderCell>
                                    <TableHeaderCell>"注文数"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || report.get().map(|r| {
                                    let widths: Vec<String> = r
                                        .daily_sales
                                        .iter()
                                        .map(|d| format!("width: {:.1}%;", r.bar_percent(d.amount)))
                                        .collect();
                                    r.daily_sales.into_iter().zip(widths).map(|(d, width)| {
                                        let date = format_date(&d.date);
                                        let amount = format_yen(d.amount);
                                        let orders = format_count(d.orders as i64, "件");
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{amount}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{orders}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <div class="sales-bar"><div class="sales-bar__fill" style=width></div></div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()
                                })}
                            </TableBody>
                        </Table>
                    </section>

                    <section class="detail-card">
                        <h3 class="detail-card__title">"人気商品"</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"順位"</TableHeaderCell>
                                    <TableHeaderCell>"商品名"</TableHeaderCell>
                                    <TableHeaderCell>"売上"</TableHeaderCell>
                                    <TableHeaderCell>"数量"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || report.get().map(|r| r.popular_products.into_iter().enumerate().map(|(rank, p)| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{rank + 1}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{p.product_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_yen(p.total_sales)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_thousands(p.total_quantity as i64)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }).collect_view())}
                            </TableBody>
                        </Table>
                    </section>
                </div>

                <section class="detail-card">
                    <div class="detail-card__header">
                        <h3 class="detail-card__title">"在庫状況"</h3>
                        <PaginationControls
                            current_page=Signal::derive(move || inventory_page.with(|p| p.page))
                            total_pages=Signal::derive(move || inventory_page.with(|p| p.total_pages))
                            range_label=Signal::derive(move || inventory_page.with(|p| p.range_label()))
                            page_size=Signal::derive(move || inventory.query.with(|q| q.page_size))
                            on_page_change=Callback::new(move |p| inventory.set_page(p))
                            on_page_size_change=Callback::new(move |s| inventory.set_page_size(s))
                        />
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"商品名"</TableHeaderCell>
                                <TableHeaderCell>"在庫数"</TableHeaderCell>
                                <TableHeaderCell>"発注点"</TableHeaderCell>
                                <TableHeaderCell>"状態"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || inventory_page.get().rows.into_iter().map(|row| {
                                let status = row.reorder_status();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.product_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_thousands(row.stock)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_thousands(row.reorder_point)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{status_badge(&status)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </section>
            </Show>
        </PageFrame>
    }
}
