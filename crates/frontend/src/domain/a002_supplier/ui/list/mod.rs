use crate::domain::a002_supplier::api;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::shared::api_utils::use_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_body::ListBody;
use crate::shared::components::notification::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::status_badge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Highlight, ListController, SearchInput, StatusFilter};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierStatus, LIST_NAME};
use contracts::domain::common::opt_str;
use contracts::shared::status::HasStatusDisplay;
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    SupplierStatus::SELECTABLE
        .iter()
        .map(|s| (s.as_str().to_string(), s.display().label))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let config = use_config();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = ListController::<Supplier>::new(config.ui.default_page_size);
    let page = list.page();

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Supplier>);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Supplier>);

    let fetch = move || {
        let api_client = api_client.get_value();
        list.load(async move { api::fetch_suppliers(&api_client).await });
    };

    let open_dialog = move |supplier: Option<Supplier>| {
        editing.set(supplier);
        dialog_open.set(true);
    };
    let on_saved = Callback::new(move |_| {
        dialog_open.set(false);
        notifications.success("取引先を保存しました");
        fetch();
    });
    let on_cancel = Callback::new(move |_| dialog_open.set(false));

    let ask_delete = move |supplier: Supplier| {
        delete_target.set(Some(supplier));
        delete_open.set(true);
    };
    let delete_message = Signal::derive(move || {
        delete_target.with(|t| {
            t.as_ref()
                .map(|s| format!("取引先「{}」を削除してもよろしいですか？", s.name))
                .unwrap_or_default()
        })
    });
    let confirm_delete = Callback::new(move |_| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let api_client = api_client.get_value();
        list.run(
            async move { api::delete_supplier(&api_client, target.id).await },
            move |result| match result {
                Ok(()) => {
                    notifications.success("取引先を削除しました");
                    fetch();
                }
                Err(e) => notifications.error(e.to_string()),
            },
        );
    });

    fetch();

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("suppliers")}
                    <h1 class="page__title">{LIST_NAME}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_dialog(None)>
                        {icon("plus")}
                        " 取引先を追加"
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
                                placeholder="取引先名・コード・担当者で検索"
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
                    empty_text="検索条件に一致する取引先がありません"
                    table=move || view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=100.0>"取引先コード"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=200.0>"取引先名"</TableHeaderCell>
                                        <TableHeaderCell resizable=true min_width=120.0>"担当者"</TableHeaderCell>
                                        <TableHeaderCell min_width=180.0>"連絡先"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"ステータス"</TableHeaderCell>
                                        <TableHeaderCell min_width=110.0>"操作"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || page.get().rows.into_iter().map(|supplier| {
                                        let for_edit = supplier.clone();
                                        let for_delete = supplier.clone();
                                        let contact = [opt_str(&supplier.email), opt_str(&supplier.phone)]
                                            .into_iter()
                                            .filter(|s| !s.is_empty())
                                            .collect::<Vec<_>>()
                                            .join(" / ");
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=supplier.code.clone() query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=supplier.name.clone() query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlight text=opt_str(&supplier.contact_person).to_string() query=list.text() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{contact}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{status_badge(&supplier.status)}</TableCellLayout>
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
                        <SupplierDetails
                            initial=editing.get_untracked()
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    })}
                </DialogSurface>
            </Dialog>

            <ConfirmDialog
                open=delete_open
                title="取引先の削除"
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
    fn test_status_options_cover_selectable_values() {
        let options = status_options();
        assert_eq!(
            options,
            vec![
                ("active".to_string(), "取引中".to_string()),
                ("inactive".to_string(), "取引停止".to_string()),
            ]
        );
    }
}
