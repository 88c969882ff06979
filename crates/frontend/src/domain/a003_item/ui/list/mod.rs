use crate::domain::a003_item::api;
use crate::domain::a003_item::ui::details::ItemDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_body::ListBody;
use crate::shared::components::notification::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_badge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Highlight, ListController, SearchInput, StatusFilter};
use crate::shared::number_format::{format_count, format_yen};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a003_item::aggregate::{Item, LIST_NAME};
use contracts::domain::common::opt_str;
use contracts::shared::status::{HasStatusDisplay, StockStatus};
use leptos::prelude::*;
use thaw::*;

/// `(key, label)` pairs for the stock status select.
pub fn stock_options() -> Vec<(String, String)> {
    StockStatus::ALL
        .iter()
        .map(|s| (s.key().to_string(), s.display().label))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ItemList() -> impl IntoView {
    let config = use_config();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = ListController::<Item>::new(config.ui.default_page_size);
    let page = list.page();

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Item>);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Item>);

    let fetch = move || {
        let api_client = api_client.get_value();
        list.load(async move { api::fetch_items(&api_client).await });
    };

    let open_dialog = move |item: Option<Item>| {
        editing.set(item);
        dialog_open.set(true);
    };
    let on_saved = Callback::new(move |_| {
        dialog_open.set(false);
        notifications.success("部品を保存しました");
        fetch();
    });
    let on_cancel = Callback::new(move |_| dialog_open.set(false));

    let delete_message = Signal::derive(move || {
        delete_target.with(|t| {
            t.as_ref()
                .map(|i| format!("部品「{}」を削除してもよろしいですか？", i.name))
                .unwrap_or_default()
        })
    });
    let confirm_delete = Callback::new(move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let api_client = api_client.get_value();
        list.run(
            async move { api::delete_item(&api_client, target.id).await },
            move |result| match result {
                Ok(()) => {
                    notifications.success("部品を削除しました");
                    fetch();
                }
                Err(e) => notifications.error(e.to_string()),
            },
        );
    });

    fetch();

    view! {
        <PageFrame page_id="a003_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("items")}
                    <h1 class="page__title">{LIST_NAME}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_dialog(None)>
                        {icon("plus")}
                        " 部品を追加"
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
                                placeholder="部品コード・部品名・仕様で検索"
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <StatusFilter
                                value=list.status()
                                options=stock_options()
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
                    empty_text="検索条件に一致する部品がありません"
                    table=move || view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=100.0>"部品コード"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=180.0>"部品名"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=140.0>"仕様"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"単価"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"在庫 / 最小"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"在庫状況"</TableHeaderCell>
                                        <TableHeaderCell min_width=70.0>"状態"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(|item| {
                                        let stock = format!(
                                            "{} / {}",
                                            format_count(item.current_stock, &item.unit),
                                            item.min_stock
                                        );
                                        let code = item.code.clone();
                                        let name = item.name.clone();
                                        let specification = opt_str(&item.specification).to_string();
                                        let price = format_yen(item.unit_price);
                                        let stock_status = item.stock_status();
                                        let active = item.active_flag();
                                        let for_edit = item.clone();
                                        let for_delete = item;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=code query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=name query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=specification query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{price}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{stock}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{status_badge(&stock_status)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{status_badge(&active)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_dialog(Some(for_edit.clone()))
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| {
                                                                delete_target.set(Some(for_delete.clone()));
                                                                delete_open.set(true);
                                                            }
                                                        >
                                                            {icon("delete")}
                                                        </Button>
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

            <Dialog open=dialog_open>
                <DialogSurface>
                    {move || dialog_open.get().then(|| view! {
                        <ItemDetails
                            initial=editing.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    })}
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="部品の削除"
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
    fn test_stock_options_keys_match_status_keys() {
        let keys: Vec<String> = stock_options().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["out_of_stock", "low", "normal"]);
    }
}
