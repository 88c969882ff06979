use crate::domain::a004_product::api;
use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_body::ListBody;
use crate::shared::components::notification::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_badge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Highlight, ListController, SearchInput, StatusFilter};
use crate::shared::number_format::{format_thousands, format_yen};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_product::aggregate::{Product, CATEGORIES, LIST_NAME};
use contracts::domain::common::opt_str;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_config();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = ListController::<Product>::new(config.ui.default_page_size);
    let page = list.page();

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Product>);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Product>);

    let fetch = move || {
        let api_client = api_client.get_value();
        list.load(async move { api::fetch_products(&api_client).await });
    };

    let open_dialog = move |product: Option<Product>| {
        editing.set(product);
        dialog_open.set(true);
    };
    let on_saved = Callback::new(move |_| {
        dialog_open.set(false);
        notifications.success("商品を保存しました");
        fetch();
    });
    let on_cancel = Callback::new(move |_| dialog_open.set(false));

    let delete_message = Signal::derive(move || {
        delete_target.with(|t| {
            t.as_ref()
                .map(|p| format!("商品「{}」を削除してもよろしいですか？", p.name))
                .unwrap_or_default()
        })
    });
    let confirm_delete = Callback::new(move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let api_client = api_client.get_value();
        list.run(
            async move { api::delete_product(&api_client, target.id).await },
            move |result| match result {
                Ok(()) => {
                    notifications.success("商品を削除しました");
                    fetch();
                }
                Err(e) => notifications.error(e.to_string()),
            },
        );
    });

    let category_options = CATEGORIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect::<Vec<_>>();

    fetch();

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">{LIST_NAME}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_dialog(None)>
                        {icon("plus")}
                        " 商品を追加"
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
                                placeholder="商品コード・商品名・カテゴリで検索"
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <StatusFilter
                                value=list.status()
                                options=category_options
                                on_change=Callback::new(move |category| list.set_status(category))
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
                    empty_text="検索条件に一致する商品がありません"
                    table=move || view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=100.0>"商品コード"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=200.0>"商品名"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"カテゴリ"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"価格"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"在庫数"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"在庫状況"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(|product| {
                                        let code = product.code.clone();
                                        let name = product.name.clone();
                                        let category = opt_str(&product.category).to_string();
                                        let price = format_yen(product.price);
                                        let stock = format_thousands(product.stock_quantity);
                                        let stock_status = product.stock_status();
                                        let for_edit = product.clone();
                                        let for_delete = product;
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
                                                        <Highlight text=category query=list.text() />
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
                        <ProductDetails
                            initial=editing.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    })}
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="商品の削除"
                message=delete_message
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
