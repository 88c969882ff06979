//! Top navigation bar: sidebar toggle, title, user name and logout.

use crate::layout::global_context::use_tabs;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();
    let session = use_session();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| session.sign_out();

    let open_settings = move |_| ctx.open_tab("sys_settings", "設定");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "メニューを隠す" } else { "メニューを表示" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"受発注管理"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=open_settings title="設定">
                    {icon("settings")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session
                            .user()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="ログアウト">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
