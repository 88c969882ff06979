use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ApiClient;
use crate::shared::components::notification::{NotificationHost, NotificationService};
use crate::shared::config::AppConfig;
use crate::system::auth::api;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{ConfigProvider, Spinner};

/// Loads the runtime configuration, then mounts the configured app.
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<AppConfig>);
    spawn_local(async move {
        config.set(Some(AppConfig::load().await));
    });

    move || match config.get() {
        Some(config) => view! { <ConfiguredApp config=config /> }.into_any(),
        None => view! {
            <div class="app-loading">
                <Spinner label="読み込み中..." />
            </div>
        }
        .into_any(),
    }
}

/// Provides every app-wide context and starts session verification.
#[component]
fn ConfiguredApp(config: AppConfig) -> impl IntoView {
    let session = SessionContext::new(config.session.timeout_minutes);
    session.restore_timeout();
    let api_client = ApiClient::new(&config, session);
    let tabs = AppGlobalContext::new();
    session.on_sign_out(Callback::new(move |_| tabs.close_all()));

    provide_context(config);
    provide_context(tabs);
    provide_context(session);
    provide_context(api_client.clone());
    provide_context(NotificationService::new());

    if session.restore_from_storage().is_some() {
        spawn_local(async move {
            match api::verify(&api_client).await {
                Ok(()) => session.confirm_verified(),
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    session.expire("verification failed");
                }
            }
        });
    }

    view! {
        <ConfigProvider>
            <AppShell />
            <NotificationHost />
        </ConfigProvider>
    }
}
