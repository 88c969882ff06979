use super::api;
use crate::shared::api_utils::{selected_file, use_api};
use crate::shared::components::notification::use_notifications;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::request_scope::RequestScope;
use chrono::{Datelike, NaiveDate};
use contracts::usecases::u502_access_sync::{
    ExportOrdersRequest, EXPORT_MASTER_STARTED, EXPORT_ORDERS_STARTED, IMPORT_ORDERS_STARTED,
};
use leptos::prelude::*;
use thaw::*;

/// Which of the three actions is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessAction {
    ExportOrders,
    ImportOrders,
    ExportMaster,
}

/// First day of the month containing `date`.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[component]
pub fn AccessSyncPage() -> impl IntoView {
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let scope = StoredValue::new(RequestScope::for_component());

    let now = today();
    let (from_date, set_from_date) = signal(month_start(now).format("%Y-%m-%d").to_string());
    let (to_date, set_to_date) = signal(now.format("%Y-%m-%d").to_string());
    let import_file = StoredValue::new_local(None::<web_sys::File>);
    let (import_name, set_import_name) = signal(None::<String>);
    let (running, set_running) = signal(None::<AccessAction>);
    let (error, set_error) = signal(None::<String>);

    let busy = Signal::derive(move || running.get().is_some());

    let finish = move |result: Result<String, String>| {
        match result {
            Ok(text) => {
                set_error.set(None);
                notifications.success(text);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_running.set(None);
    };

    let export_orders = move |_| {
        let request = match ExportOrdersRequest::parse(&from_date.get_untracked(), &to_date.get_untracked()) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        set_running.set(Some(AccessAction::ExportOrders));
        scope.run(async move { api::export_orders(&api_client, &request).await }, move |result| {
            finish(result.map(|ack| ack.message_or(EXPORT_ORDERS_STARTED)).map_err(|e| e.to_string()))
        });
    };

    let import_orders = move |_| {
        let Some(file) = import_file.get_value() else {
            set_error.set(Some("ファイルを選択してください".to_string()));
            return;
        };
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        set_running.set(Some(AccessAction::ImportOrders));
        scope.run(async move { api::import_orders(&api_client, &file).await }, move |result| {
            finish(result.map(|ack| ack.message_or(IMPORT_ORDERS_STARTED)).map_err(|e| e.to_string()))
        });
    };

    let export_master = move |_| {
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        set_running.set(Some(AccessAction::ExportMaster));
        scope.run(async move { api::export_master(&api_client).await }, move |result| {
            finish(result.map(|ack| ack.message_or(EXPORT_MASTER_STARTED)).map_err(|e| e.to_string()))
        });
    };

    let running_label = move |action: AccessAction, idle: &'static str| {
        move || if running.get() == Some(action) { "処理中..." } else { idle }
    };

    view! {
        <PageFrame page_id="u502_access_sync--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("database")}
                    <h1 class="page__title">"Access連携"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <section class="detail-card">
                    <h3 class="detail-card__title">"注文データのエクスポート"</h3>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="access-from">"開始日"</label>
                            <input
                                type="date"
                                id="access-from"
                                prop:value=move || from_date.get()
                                on:input=move |ev| set_from_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="access-to">"終了日"</label>
                            <input
                                type="date"
                                id="access-to"
                                prop:value=move || to_date.get()
                                on:input=move |ev| set_to_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=export_orders disabled=busy>
                        {icon("download")}
                        " "
                        {running_label(AccessAction::ExportOrders, "エクスポート")}
                    </Button>
                </section>

                <section class="detail-card">
                    <h3 class="detail-card__title">"注文データのインポート"</h3>
                    <div class="upload-row">
                        <input
                            type="file"
                            accept=".accdb,.mdb,.csv"
                            on:change=move |ev| {
                                let file = selected_file(&ev);
                                set_import_name.set(file.as_ref().map(|f| f.name()));
                                import_file.set_value(file);
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=import_orders
                            disabled=Signal::derive(move || busy.get() || import_name.get().is_none())
                        >
                            {icon("upload")}
                            " "
                            {running_label(AccessAction::ImportOrders, "インポート")}
                        </Button>
                    </div>
                </section>

                <section class="detail-card">
                    <h3 class="detail-card__title">"マスターデータのエクスポート"</h3>
                    <p class="detail-card__hint">"顧客・部品・商品・取引先のマスターデータをAccessへ出力します"</p>
                    <Button appearance=ButtonAppearance::Secondary on_click=export_master disabled=busy>
                        {icon("database")}
                        " "
                        {running_label(AccessAction::ExportMaster, "マスターエクスポート")}
                    </Button>
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(month_start(d), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
