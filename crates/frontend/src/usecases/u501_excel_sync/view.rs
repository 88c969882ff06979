use super::api;
use crate::shared::api_utils::{selected_file, use_api};
use crate::shared::components::notification::use_notifications;
use crate::shared::download::{save_bytes, XLSX_MIME};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::request_scope::RequestScope;
use contracts::usecases::u501_excel_sync::{is_excel_file, TemplateKind, UPLOAD_SUCCESS_MESSAGE};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ExcelSyncPage() -> impl IntoView {
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let scope = StoredValue::new(RequestScope::for_component());

    // web_sys::File is not Send, keep it local to this thread.
    let selected = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);
    let (downloading, set_downloading) = signal(None::<TemplateKind>);
    let (error, set_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        set_message.set(None);
        match selected_file(&ev) {
            Some(file) if is_excel_file(&file.name()) => {
                set_error.set(None);
                set_file_name.set(Some(file.name()));
                selected.set_value(Some(file));
            }
            Some(_) => {
                set_error.set(Some("Excelファイル (.xlsx, .xls) を選択してください".to_string()));
                set_file_name.set(None);
                selected.set_value(None);
            }
            None => {
                set_file_name.set(None);
                selected.set_value(None);
            }
        }
    };

    let upload = move |_| {
        let Some(file) = selected.get_value() else {
            set_error.set(Some("ファイルを選択してください".to_string()));
            return;
        };
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        set_uploading.set(true);
        set_error.set(None);
        set_message.set(None);
        scope.run(
            async move { api::upload_order_sheet(&api_client, &file).await },
            move |result| {
                match result {
                    Ok(ack) => {
                        let text = ack.message_or(UPLOAD_SUCCESS_MESSAGE);
                        notifications.success(text.clone());
                        set_message.set(Some(text));
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_uploading.set(false);
            },
        );
    };

    let download = move |kind: TemplateKind| {
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        set_downloading.set(Some(kind));
        set_error.set(None);
        scope.run(
            async move { api::download_template(&api_client, kind).await },
            move |result| {
                let saved = result
                    .map_err(|e| e.to_string())
                    .and_then(|bytes| save_bytes(&bytes, kind.file_name(), XLSX_MIME));
                if let Err(e) = saved {
                    log::error!("template download failed: {}", e);
                    set_error.set(Some(e));
                }
                set_downloading.set(None);
            },
        );
    };

    view! {
        <PageFrame page_id="u501_excel_sync--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("file-spreadsheet")}
                    <h1 class="page__title">"Excel連携"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || message.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}

                <section class="detail-card">
                    <h3 class="detail-card__title">"注文ファイルのアップロード"</h3>
                    <p class="detail-card__hint">"対応形式: .xlsx, .xls"</p>
                    <div class="upload-row">
                        <input type="file" accept=".xlsx,.xls" on:change=on_file_change />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=upload
                            disabled=Signal::derive(move || uploading.get() || file_name.get().is_none())
                        >
                            {icon("upload")}
                            {move || if uploading.get() { " アップロード中..." } else { " アップロード" }}
                        </Button>
                    </div>
                    {move || file_name.get().map(|n| view! { <div class="upload-row__file">"選択中: " {n}</div> })}
                </section>

                <section class="detail-card">
                    <h3 class="detail-card__title">"テンプレート"</h3>
                    <div class="button-row">
                        {[TemplateKind::Order, TemplateKind::Inventory]
                            .into_iter()
                            .map(|kind| view! {
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| download(kind)
                                    disabled=Signal::derive(move || downloading.get().is_some())
                                >
                                    {icon("download")}
                                    " "
                                    {kind.button_label()}
                                </Button>
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </PageFrame>
    }
}
