use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_tabs;
use crate::shared::api_utils::use_api;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let session = use_session();
    let api_client = use_api();
    let tabs_store = use_tabs();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        let api_client = api_client.clone();
        spawn_local(async move {
            match api::login(&api_client, username_val, password_val).await {
                Ok(response) => {
                    session.sign_in(response);
                    tabs_store.open_tab("d400_dashboard", "ダッシュボード");
                }
                Err(e) => error_message.set(Some(e)),
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"受発注管理システム"</h1>
                <h2>"ログイン"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"メールアドレス"</label>
                        <input
                            type="email"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"パスワード"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "ログイン中..." } else { "ログイン" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
