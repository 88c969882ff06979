use leptos::prelude::*;
use thaw::Spinner;

use super::context::{use_session, AuthStatus};
use crate::system::pages::login::LoginPage;

/// The only auth gate of the app.
///
/// Renders `children` for a verified session, the login page otherwise.
/// While a restored token is being verified a spinner is shown, so the
/// shell never flashes before the check completes.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let children = StoredValue::new(children);

    move || match session.status() {
        AuthStatus::Verifying => view! {
            <div class="app-loading">
                <Spinner label="認証を確認しています..." />
            </div>
        }
        .into_any(),
        AuthStatus::Anonymous => view! { <LoginPage /> }.into_any(),
        AuthStatus::Authenticated => children.with_value(|c| c()).into_any(),
    }
}
