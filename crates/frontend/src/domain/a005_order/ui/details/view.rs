use super::view_model::OrderDetailsViewModel;
use crate::shared::api_utils::use_api;
use crate::shared::components::status_badge::status_badge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::number_format::format_yen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a005_order::aggregate::{order_number, Order};
use contracts::domain::common::opt_str;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(id);
    let api_client = StoredValue::new(use_api());

    vm.load(api_client.get_value());

    view! {
        <PageFrame page_id="a005_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"注文詳細 " {order_number(id)}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load(api_client.get_value())
                        disabled=vm.loading
                    >
                        {icon("refresh")}
                        " 更新"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " 閉じる"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <div class="list-placeholder">
                                <Spinner label="読み込み中..." />
                            </div>
                        }
                        .into_any()
                    } else if let Some(message) = vm.error.get() {
                        view! { <div class="alert alert--error">{message}</div> }.into_any()
                    } else if let Some(order) = vm.order.get() {
                        order_body(order).into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

fn order_body(order: Order) -> impl IntoView {
    let total = format_yen(order.total_amount());
    let delivery = order
        .delivery_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());
    let notes = order.notes.clone().filter(|n| !n.trim().is_empty());
    let number = order.order_number();
    let ordered = format_datetime(&order.order_date);
    let status = order.status.clone();
    let customer_name = order.customer.name.clone();
    let email = opt_str(&order.customer.email).to_string();
    let address = opt_str(&order.shipping_address).to_string();
    let lines = order.items;

    view! {
        <div class="detail-grid">
            <section class="detail-card">
                <h3 class="detail-card__title">"注文情報"</h3>
                <dl class="detail-list">
                    <dt>"注文番号"</dt>
                    <dd>{number}</dd>
                    <dt>"注文日時"</dt>
                    <dd>{ordered}</dd>
                    <dt>"配送希望日"</dt>
                    <dd>{delivery}</dd>
                    <dt>"ステータス"</dt>
                    <dd>{status_badge(&status)}</dd>
                </dl>
            </section>

            <section class="detail-card">
                <h3 class="detail-card__title">"顧客情報"</h3>
                <dl class="detail-list">
                    <dt>"顧客名"</dt>
                    <dd>{customer_name}</dd>
                    <dt>"メールアドレス"</dt>
                    <dd>{email}</dd>
                    <dt>"配送先住所"</dt>
                    <dd>{address}</dd>
                </dl>
            </section>
        </div>

        <section class="detail-card">
            <h3 class="detail-card__title">"注文明細"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"商品名"</TableHeaderCell>
                        <TableHeaderCell>"単価"</TableHeaderCell>
                        <TableHeaderCell>"数量"</TableHeaderCell>
                        <TableHeaderCell>"小計"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {lines
                        .into_iter()
                        .map(|line| {
                            let unit_price = format_yen(line.unit_price);
                            let subtotal = format_yen(line.subtotal());
                            let quantity = line.quantity;
                            let name = line.item.name;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{unit_price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{quantity}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{subtotal}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
            <div class="order-total">
                <span class="order-total__label">"合計"</span>
                <span class="order-total__value">{total}</span>
            </div>
        </section>

        {notes.map(|n| view! {
            <section class="detail-card">
                <h3 class="detail-card__title">"備考"</h3>
                <p class="detail-notes">{n}</p>
            </section>
        })}
    }
}
