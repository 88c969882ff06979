//! Session context: the single source of truth for "is authenticated".
//!
//! Provided once by `App` and read through [`use_session`]. The HTTP client
//! consults it for the bearer token and reports 401 responses back to it.

use chrono::Utc;
use contracts::system::auth::{LoginResponse, Session, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Stored token found, waiting for `/api/auth/verify`.
    Verifying,
    Anonymous,
    Authenticated,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    status: RwSignal<AuthStatus>,
    timeout_minutes: RwSignal<u32>,
    on_sign_out: StoredValue<Option<Callback<()>>>,
}

impl SessionContext {
    pub fn new(timeout_minutes: u32) -> Self {
        Self {
            session: RwSignal::new(None),
            status: RwSignal::new(AuthStatus::Anonymous),
            timeout_minutes: RwSignal::new(timeout_minutes),
            on_sign_out: StoredValue::new(None),
        }
    }

    /// Runs after every sign-out, including server rejections and idle expiry.
    pub fn on_sign_out(&self, callback: Callback<()>) {
        self.on_sign_out.set_value(Some(callback));
    }

    /// Apply the timeout saved by an earlier visit, if any.
    pub fn restore_timeout(&self) {
        if let Some(minutes) = storage::load_timeout_minutes() {
            self.timeout_minutes.set(minutes);
        }
    }

    /// Load the stored session. Returns it when it still needs server verification.
    pub fn restore_from_storage(&self) -> Option<Session> {
        let now = Utc::now();
        let stored = storage::load_session(now)?;
        if stored.is_expired(now, self.timeout_minutes.get_untracked()) {
            log::info!("Stored session expired, login required");
            storage::clear_session();
            return None;
        }
        self.session.set(Some(stored.clone()));
        self.status.set(AuthStatus::Verifying);
        Some(stored)
    }

    pub fn confirm_verified(&self) {
        if self.session.with_untracked(|s| s.is_some()) {
            self.status.set(AuthStatus::Authenticated);
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.get() == AuthStatus::Authenticated
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn timeout_minutes(&self) -> u32 {
        self.timeout_minutes.get_untracked()
    }

    pub fn set_timeout_minutes(&self, minutes: u32) {
        self.timeout_minutes.set(minutes);
        storage::save_timeout_minutes(minutes);
    }

    /// Bearer header for the next request, or `None` when signed out or idle too long.
    pub fn authorization_header(&self) -> Option<String> {
        let now = Utc::now();
        let timeout = self.timeout_minutes.get_untracked();
        let (header, expired) = self.session.with_untracked(|s| {
            s.as_ref()
                .map(|s| (s.authorization_header(), s.is_expired(now, timeout)))
        })?;
        if expired {
            self.expire("idle timeout");
            return None;
        }
        Some(header)
    }

    /// Record activity after a successful authenticated call.
    pub fn touch(&self) {
        let now = Utc::now();
        self.session.update(|s| {
            if let Some(s) = s {
                s.touch(now);
            }
        });
        storage::save_last_activity(now);
    }

    pub fn update_user(&self, user: UserInfo) {
        self.session.update(|s| {
            if let Some(s) = s {
                s.user = user;
            }
        });
        if let Some(current) = self.session.get_untracked() {
            storage::save_session(&current);
        }
    }

    pub fn sign_in(&self, response: LoginResponse) {
        let session = Session::from_login(response, Utc::now());
        log::info!("Signed in as {}", session.user.email);
        storage::save_session(&session);
        self.session.set(Some(session));
        self.status.set(AuthStatus::Authenticated);
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.session.set(None);
        self.status.set(AuthStatus::Anonymous);
        if let Some(callback) = self.on_sign_out.try_get_value().flatten() {
            callback.run(());
        }
    }

    /// End the session because the server or the idle policy rejected it.
    pub fn expire(&self, reason: &str) {
        if self.session.with_untracked(|s| s.is_some()) {
            log::info!("Session ended: {}", reason);
        }
        self.sign_out();
    }
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::{AppGlobalContext, Tab};

    #[test]
    fn test_expire_closes_open_tabs() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionContext::new(30);
            let tabs = AppGlobalContext::new();
            session.on_sign_out(Callback::new(move |_| tabs.close_all()));
            tabs.opened.set(vec![Tab {
                key: "a001_customer".to_string(),
                title: "顧客管理".to_string(),
            }]);
            tabs.active.set(Some("a001_customer".to_string()));

            session.expire("server rejected the token");

            assert_eq!(session.status.get_untracked(), AuthStatus::Anonymous);
            assert!(tabs.opened.get_untracked().is_empty());
            assert_eq!(tabs.active.get_untracked(), None);
        });
    }

    #[test]
    fn test_timeout_change_applies_to_session() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionContext::new(30);
            session.set_timeout_minutes(90);
            assert_eq!(session.timeout_minutes(), 90);
        });
    }
}
