use super::api;
use crate::shared::api_utils::{selected_file, use_api};
use crate::shared::components::notification::use_notifications;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::request_scope::RequestScope;
use crate::system::auth::context::use_session;
use contracts::domain::common::opt_str;
use contracts::system::settings::{
    PasswordChange, ProfileUpdate, SecuritySettings, SystemSettings, DATE_FORMATS, LANGUAGES,
    SESSION_TIMEOUT_MAX, SESSION_TIMEOUT_MIN, TIMEZONES,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let selected_tab = RwSignal::new("profile".to_string());

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("settings")}
                    <h1 class="page__title">"設定"</h1>
                </div>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value="profile">"プロフィール"</Tab>
                    <Tab value="system">"システム設定"</Tab>
                    <Tab value="security">"セキュリティ"</Tab>
                </TabList>

                <div class="settings-panel">
                    {move || match selected_tab.get().as_str() {
                        "system" => view! { <SystemSettingsTab /> }.into_any(),
                        "security" => view! { <SecuritySettingsTab /> }.into_any(),
                        _ => view! { <ProfileSettingsTab /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn ProfileSettingsTab() -> impl IntoView {
    let session = use_session();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let scope = StoredValue::new(RequestScope::for_component());

    let user = session.user();
    let form = RwSignal::new(
        user.as_ref()
            .map(|u| ProfileUpdate {
                name: u.name.clone(),
                email: u.email.clone(),
                phone: u.phone.clone(),
                position: u.position.clone(),
            })
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let avatar_url = Signal::derive(move || session.user().and_then(|u| u.avatar_url));
    let initial = Signal::derive(move || {
        session
            .user()
            .map(|u| u.display_name().chars().next().map(String::from).unwrap_or_default())
            .unwrap_or_default()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = form.get_untracked();
        if let Err(e) = profile.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let profile = profile.normalized();
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        saving.set(true);
        error.set(None);
        scope.run(
            async move { api::update_profile(&api_client, &profile).await },
            move |result| {
                saving.set(false);
                match result {
                    Ok(updated) => {
                        session.update_user(updated);
                        notifications.success("プロフィールを更新しました");
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        uploading.set(true);
        scope.run(
            async move { api::upload_avatar(&api_client, &file).await },
            move |result| {
                uploading.set(false);
                match result {
                    Ok(url) => {
                        if let Some(mut current) = session.user() {
                            current.avatar_url = Some(url);
                            session.update_user(current);
                        }
                        notifications.success("アバターを更新しました");
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    };

    view! {
        <form class="details-container settings-form" on:submit=on_submit>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="avatar-row">
                {move || match avatar_url.get() {
                    Some(src) => view! { <img class="avatar avatar--large" src=src alt="avatar" /> }.into_any(),
                    None => view! { <div class="avatar avatar--large avatar--placeholder">{initial.get()}</div> }.into_any(),
                }}
                <label class="btn-secondary avatar-row__upload">
                    {icon("upload")}
                    {move || if uploading.get() { " アップロード中..." } else { " 画像を変更" }}
                    <input type="file" accept="image/*" hidden on:change=on_avatar_change />
                </label>
            </div>

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="profile-name">"氏名" <span class="required">"*"</span></label>
                        <input
                            type="text"
                            id="profile-name"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-email">"メールアドレス" <span class="required">"*"</span></label>
                        <input
                            type="email"
                            id="profile-email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="profile-phone">"電話番号"</label>
                        <input
                            type="tel"
                            id="profile-phone"
                            prop:value=move || form.with(|f| opt_str(&f.phone).to_string())
                            on:input=move |ev| form.update(|f| f.phone = Some(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-position">"役職"</label>
                        <input
                            type="text"
                            id="profile-position"
                            prop:value=move || form.with(|f| opt_str(&f.position).to_string())
                            on:input=move |ev| form.update(|f| f.position = Some(event_target_value(&ev)))
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button type="submit" class="btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "保存中..." } else { "保存" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn SystemSettingsTab() -> impl IntoView {
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let scope = StoredValue::new(RequestScope::for_component());

    let settings = RwSignal::new(SystemSettings::default());
    let email_notifications = RwSignal::new(settings.get_untracked().email_notifications);
    let push_notifications = RwSignal::new(settings.get_untracked().push_notifications);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    {
        let api_client = api_client.get_value();
        scope.get_value().spawn(
            async move { api::fetch_system_settings(&api_client).await },
            move |result| {
                match result {
                    Ok(loaded) => {
                        email_notifications.set(loaded.email_notifications);
                        push_notifications.set(loaded.push_notifications);
                        settings.set(loaded);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            },
        );
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = settings.get_untracked();
        current.email_notifications = email_notifications.get_untracked();
        current.push_notifications = push_notifications.get_untracked();
        if let Err(e) = current.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        let saved = current.clone();
        saving.set(true);
        error.set(None);
        scope.run(
            async move { api::save_system_settings(&api_client, &current).await },
            move |result| {
                saving.set(false);
                match result {
                    Ok(()) => {
                        settings.set(saved);
                        notifications.success("システム設定を保存しました");
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="list-placeholder"><Spinner label="読み込み中..." /></div> }
        >
            <form class="details-container settings-form" on:submit=on_submit>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="system-language">"言語"</label>
                        <select
                            id="system-language"
                            prop:value=move || settings.with(|s| s.language.clone())
                            on:change=move |ev| settings.update(|s| s.language = event_target_value(&ev))
                        >
                            {LANGUAGES.iter().map(|(v, l)| view! { <option value=*v>{*l}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="system-timezone">"タイムゾーン"</label>
                        <select
                            id="system-timezone"
                            prop:value=move || settings.with(|s| s.timezone.clone())
                            on:change=move |ev| settings.update(|s| s.timezone = event_target_value(&ev))
                        >
                            {TIMEZONES.iter().map(|(v, l)| view! { <option value=*v>{*l}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="system-date-format">"日付形式"</label>
                        <select
                            id="system-date-format"
                            prop:value=move || settings.with(|s| s.date_format.clone())
                            on:change=move |ev| settings.update(|s| s.date_format = event_target_value(&ev))
                        >
                            {DATE_FORMATS.iter().map(|f| view! { <option value=*f>{*f}</option> }).collect_view()}
                        </select>
                    </div>

                    <h4 class="settings-form__section">"通知設定"</h4>
                    <Switch checked=email_notifications label="メール通知" />
                    <Switch checked=push_notifications label="プッシュ通知" />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "保存中..." } else { "保存" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}

#[component]
fn SecuritySettingsTab() -> impl IntoView {
    let session = use_session();
    let api_client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let scope = StoredValue::new(RequestScope::for_component());

    let password = RwSignal::new(PasswordChange::default());
    let password_error = RwSignal::new(None::<String>);
    let password_saving = RwSignal::new(false);

    let two_factor = RwSignal::new(false);
    let timeout = RwSignal::new(session.timeout_minutes().to_string());
    let security_error = RwSignal::new(None::<String>);
    let security_saving = RwSignal::new(false);

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match password.with_untracked(|p| p.validate()) {
            Ok(r) => r,
            Err(e) => {
                password_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        password_saving.set(true);
        password_error.set(None);
        scope.run(
            async move { api::change_password(&api_client, &request).await },
            move |result| {
                password_saving.set(false);
                match result {
                    Ok(()) => {
                        password.set(PasswordChange::default());
                        notifications.success("パスワードを変更しました");
                    }
                    Err(e) => password_error.set(Some(e.to_string())),
                }
            },
        );
    };

    let on_security_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(minutes) = timeout.get_untracked().trim().parse::<u32>() else {
            security_error.set(Some(
                "セッションタイムアウト（分）には数値を入力してください".to_string(),
            ));
            return;
        };
        let settings = SecuritySettings {
            two_factor_enabled: two_factor.get_untracked(),
            session_timeout: minutes,
        };
        if let Err(e) = settings.validate() {
            security_error.set(Some(e.to_string()));
            return;
        }
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let api_client = api_client.get_value();
        let minutes = settings.session_timeout;
        security_saving.set(true);
        security_error.set(None);
        scope.run(
            async move { api::save_security_settings(&api_client, &settings).await },
            move |result| {
                security_saving.set(false);
                match result {
                    Ok(()) => {
                        session.set_timeout_minutes(minutes);
                        notifications.success("セキュリティ設定を保存しました");
                    }
                    Err(e) => security_error.set(Some(e.to_string())),
                }
            },
        );
    };

    view! {
        <form class="details-container settings-form" on:submit=on_password_submit>
            <h4 class="settings-form__section">"パスワード変更"</h4>
            {move || password_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <div class="form-group">
                    <label for="current-password">"現在のパスワード"</label>
                    <input
                        type="password"
                        id="current-password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.with(|p| p.current_password.clone())
                        on:input=move |ev| password.update(|p| p.current_password = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="new-password">"新しいパスワード"</label>
                    <input
                        type="password"
                        id="new-password"
                        required
                        autocomplete="new-password"
                        prop:value=move || password.with(|p| p.new_password.clone())
                        on:input=move |ev| password.update(|p| p.new_password = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="confirm-password">"新しいパスワード（確認）"</label>
                    <input
                        type="password"
                        id="confirm-password"
                        required
                        autocomplete="new-password"
                        prop:value=move || password.with(|p| p.confirm_password.clone())
                        on:input=move |ev| password.update(|p| p.confirm_password = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="details-actions">
                <button type="submit" class="btn-primary" disabled=move || password_saving.get()>
                    {move || if password_saving.get() { "変更中..." } else { "パスワードを変更" }}
                </button>
            </div>
        </form>

        <form class="details-container settings-form" on:submit=on_security_submit>
            <h4 class="settings-form__section">"セキュリティ設定"</h4>
            {move || security_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-form">
                <Switch checked=two_factor label="二要素認証" />
                <div class="form-group">
                    <label for="session-timeout">"セッションタイムアウト（分）"</label>
                    <input
                        type="number"
                        id="session-timeout"
                        min=SESSION_TIMEOUT_MIN.to_string()
                        max=SESSION_TIMEOUT_MAX.to_string()
                        prop:value=move || timeout.get()
                        on:input=move |ev| timeout.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="details-actions">
                <button type="submit" class="btn-primary" disabled=move || security_saving.get()>
                    {move || if security_saving.get() { "保存中..." } else { "保存" }}
                </button>
            </div>
        </form>
    }
}
