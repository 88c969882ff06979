use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_body::ListBody;
use crate::shared::components::notification::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_badge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Highlight, ListController, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_customer::aggregate::{Customer, LIST_NAME};
use contracts::domain::common::opt_str;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let config = use_config();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = ListController::<Customer>::new(config.ui.default_page_size);
    let page = list.page();

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Customer>);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Customer>);

    let fetch = move || {
        let api_client = api_client.get_value();
        list.load(async move { api::fetch_customers(&api_client).await });
    };

    let open_new = move || {
        editing.set(None);
        dialog_open.set(true);
    };
    let open_edit = move |customer: Customer| {
        editing.set(Some(customer));
        dialog_open.set(true);
    };
    let on_saved = Callback::new(move |_| {
        dialog_open.set(false);
        notifications.success("顧客を保存しました");
        fetch();
    });
    let on_cancel = Callback::new(move |_| dialog_open.set(false));

    let ask_delete = move |customer: Customer| {
        delete_target.set(Some(customer));
        delete_open.set(true);
    };
    let delete_message = Signal::derive(move || {
        delete_target.with(|t| {
            t.as_ref()
                .map(|c| format!("顧客「{}」を削除してもよろしいですか？", c.name))
                .unwrap_or_default()
        })
    });
    let confirm_delete = Callback::new(move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let api_client = api_client.get_value();
        list.run(
            async move { api::delete_customer(&api_client, target.id).await },
            move |result| match result {
                Ok(()) => {
                    notifications.success("顧客を削除しました");
                    fetch();
                }
                Err(e) => notifications.error(e.to_string()),
            },
        );
    });

    fetch();

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">{LIST_NAME}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                        {icon("plus")}
                        " 顧客を追加"
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
                                placeholder="顧客名・コード・担当者で検索"
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
                    empty_text="検索条件に一致する顧客がありません"
                    table=move || view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=100.0>"顧客コード"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=200.0>"顧客名"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=120.0>"担当者"</TableHeaderCell>
                                        <TableHeaderCell min_width=180.0>"メールアドレス"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"電話番号"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"状態"</TableHeaderCell>
                                        <TableHeaderCell min_width=80.0>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(|customer| {
                                        let code = customer.code.clone();
                                        let name = customer.name.clone();
                                        let contact = opt_str(&customer.contact_person).to_string();
                                        let email = opt_str(&customer.email).to_string();
                                        let phone = opt_str(&customer.phone).to_string();
                                        let active = customer.active_flag();
                                        let for_edit = customer.clone();
                                        let for_delete = customer;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=code query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open_edit(for_edit.clone());
                                                            }
                                                        >
                                                            <Highlight text=name query=list.text() />
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=contact query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{phone}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{status_badge(&active)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| ask_delete(for_delete.clone())
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
                        <CustomerDetails
                            initial=editing.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    })}
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="顧客の削除"
                message=delete_message
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}
