use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Open tabs, the active tab and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab named by `?active=` and keeps the query in sync afterwards.
    pub fn init_router_integration(&self) {
        if let Some(active_key) = active_from_search(&current_search()) {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if exists {
                self.activate_tab(&active_key);
            } else {
                self.open_tab(&active_key, &tab_label_for_key(&active_key));
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = search_for_active(&active_key);

            // Only update URL if it actually changed
            if current_search() != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Closes `key`. When it was active, its right neighbour (or the new last tab) becomes active.
    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let mut closed_at = None;
        self.opened.update(|tabs| {
            closed_at = tabs.iter().position(|tab| tab.key == key);
            tabs.retain(|tab| tab.key != key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| next_after_close(tabs, closed_at));
            self.active.set(next_active);
        }
    }

    /// Drops every tab, used on sign-out.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

pub fn use_tabs() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn search_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

fn next_after_close(tabs: &[Tab], closed_at: Option<usize>) -> Option<String> {
    let index = closed_at?.min(tabs.len().checked_sub(1)?);
    tabs.get(index).map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.to_string(),
            title: key.to_string(),
        }
    }

    #[test]
    fn test_active_round_trips_through_query() {
        let search = search_for_active("a005_order_detail_12");
        assert_eq!(search, "?active=a005_order_detail_12");
        assert_eq!(active_from_search(&search).as_deref(), Some("a005_order_detail_12"));
    }

    #[test]
    fn test_missing_or_empty_active() {
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?foo=1"), None);
        assert_eq!(active_from_search("?active="), None);
    }

    #[test]
    fn test_next_after_close_prefers_right_neighbour() {
        // tabs after removing "b" from [a, b, c]
        let tabs = vec![tab("a"), tab("c")];
        assert_eq!(next_after_close(&tabs, Some(1)).as_deref(), Some("c"));
        // closed the last one
        let tabs = vec![tab("a"), tab("b")];
        assert_eq!(next_after_close(&tabs, Some(2)).as_deref(), Some("b"));
        assert_eq!(next_after_close(&[], Some(0)), None);
        assert_eq!(next_after_close(&tabs, None), None);
    }
}
