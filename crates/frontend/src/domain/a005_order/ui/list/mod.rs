use crate::domain::a005_order::api;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::tab_labels::ORDER_NEW_KEY;
use crate::layout::tabs::{order_detail_key, tab_label_for_key};
use crate::shared::api_utils::use_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_body::ListBody;
use crate::shared::components::notification::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_badge;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Highlight, ListController, SearchInput, StatusFilter};
use crate::shared::number_format::format_yen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a005_order::aggregate::{Order, OrderStatus, LIST_NAME};
use contracts::domain::common::EntityId;
use contracts::shared::status::HasStatusDisplay;
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    OrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.display().label))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let config = use_config();
    let tabs = use_tabs();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = ListController::<Order>::new(config.ui.default_page_size);
    let page = list.page();

    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<EntityId>);

    let fetch = move || {
        let api_client = api_client.get_value();
        list.load(async move { api::fetch_orders(&api_client).await });
    };

    let open_detail = move |id: EntityId| {
        let key = order_detail_key(id);
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };
    let open_new = move |_| tabs.open_tab(ORDER_NEW_KEY, &tab_label_for_key(ORDER_NEW_KEY));

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map(|id| format!("注文ID: {} を削除してもよろしいですか？", id))
            .unwrap_or_default()
    });
    let confirm_delete = Callback::new(move |_| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        let api_client = api_client.get_value();
        list.run(
            async move { api::delete_order(&api_client, id).await },
            move |result| match result {
                Ok(()) => {
                    notifications.success("注文を削除しました");
                    fetch();
                }
                Err(e) => notifications.error(e.to_string()),
            },
        );
    });

    fetch();

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">{LIST_NAME}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_new>
                        {icon("plus")}
                        " 新規注文"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=list.is_loading()
                    >
                        {icon("refresh")}
                        " 更新"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=list.text()
                                on_change=Callback::new(move |text| list.set_text(text))
                                placeholder="注文IDまたは顧客名で検索"
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <StatusFilter
                                value=list.status()
                                options=status_options()
                                on_change=Callback::new(move |status| list.set_status(status))
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <PaginationControls
                                current_page=Signal::derive(move || page.with(|p| p.page))
                                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                                range_label=Signal::derive(move || page.with(|p| p.range_label()))
                                page_size=Signal::derive(move || list.query.with(|q| q.page_size))
                                on_page_change=Callback::new(move |p| list.set_page(p))
                                on_page_size_change=Callback::new(move |s| list.set_page_size(s))
                            />
                        </div>
                    </div>
                </div>

                <ListBody
                    loading=list.is_loading()
                    error=list.error()
                    is_empty=Signal::derive(move || page.with(|p| p.is_empty()))
                    empty_text="検索条件に一致する注文がありません"
                    table=move || view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=80.0>"注文ID"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=200.0>"顧客名"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"注文日"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"配送希望日"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"合計金額"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"ステータス"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(|order| {
                                        let id = order.id;
                                        let customer_name = order.customer.name.clone();
                                        let ordered = format_date(&order.order_date);
                                        let total = format_yen(order.total_amount());
                                        let status = order.status;
                                        let delivery = order
                                            .delivery_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <TableRow on:click=move |_| open_detail(id) attr:style="cursor: pointer;">
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=id.to_string() query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=customer_name query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{ordered}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{delivery}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{total}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{status_badge(&status)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="row-actions" on:click=|ev| ev.stop_propagation()>
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| open_detail(id)
                                                            >
                                                                "詳細"
                                                            </Button>
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| {
                                                                    delete_target.set(Some(id));
                                                                    delete_open.set(true);
                                                                }
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                />
            </div>

            <ConfirmDialog
                open=delete_open
                title="注文の削除"
                message=delete_message
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_follow_lifecycle_order() {
        let options = status_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("pending".to_string(), "確認待ち".to_string()));
        assert_eq!(options[5], ("cancelled".to_string(), "キャンセル".to_string()));
    }
}
