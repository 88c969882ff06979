use chrono::{DateTime, Utc};
use contracts::system::auth::{Session, UserInfo};
use contracts::system::settings::{SESSION_TIMEOUT_MAX, SESSION_TIMEOUT_MIN};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const LAST_ACTIVITY_KEY: &str = "session_last_activity";
const TIMEOUT_KEY: &str = "session_timeout";

#[cfg(target_arch = "wasm32")]
fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

// Native test builds have no browser storage.
#[cfg(not(target_arch = "wasm32"))]
fn get_local_storage() -> Option<web_sys::Storage> {
    None
}

/// Persist token, user record and last activity time
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage is not available, session will not survive reload");
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.access_token);
    match serde_json::to_string(&session.user) {
        Ok(user) => {
            let _ = storage.set_item(USER_KEY, &user);
        }
        Err(e) => log::warn!("Failed to serialize user record: {}", e),
    }
    save_last_activity(session.last_activity);
}

pub fn save_last_activity(at: DateTime<Utc>) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LAST_ACTIVITY_KEY, &at.to_rfc3339());
    }
}

/// Restore the stored session. Missing activity time counts as `now`.
pub fn load_session(now: DateTime<Utc>) -> Option<Session> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        return None;
    }
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user: UserInfo = match serde_json::from_str(&user_json) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Stored user record is unreadable: {}", e);
            return None;
        }
    };
    let last_activity = storage
        .get_item(LAST_ACTIVITY_KEY)
        .ok()
        .flatten()
        .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(now);

    Some(Session::new(token, user, last_activity))
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(LAST_ACTIVITY_KEY);
    }
}

/// Kept across sign-out, it is a browser preference rather than session state.
pub fn save_timeout_minutes(minutes: u32) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TIMEOUT_KEY, &minutes.to_string());
    }
}

pub fn load_timeout_minutes() -> Option<u32> {
    let raw = get_local_storage()?.get_item(TIMEOUT_KEY).ok()??;
    let parsed = parse_timeout_minutes(&raw);
    if parsed.is_none() {
        log::warn!("Ignoring stored session timeout {:?}", raw);
    }
    parsed
}

fn parse_timeout_minutes(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (SESSION_TIMEOUT_MIN..=SESSION_TIMEOUT_MAX).contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_minutes() {
        assert_eq!(parse_timeout_minutes("45"), Some(45));
        assert_eq!(parse_timeout_minutes(" 5 "), Some(SESSION_TIMEOUT_MIN));
        assert_eq!(parse_timeout_minutes("120"), Some(SESSION_TIMEOUT_MAX));
        assert_eq!(parse_timeout_minutes("4"), None);
        assert_eq!(parse_timeout_minutes("121"), None);
        assert_eq!(parse_timeout_minutes("-10"), None);
        assert_eq!(parse_timeout_minutes("thirty"), None);
        assert_eq!(parse_timeout_minutes(""), None);
    }
}
