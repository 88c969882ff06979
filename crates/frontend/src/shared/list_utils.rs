//! Shared list page plumbing: the list controller, search box and match highlighting.
//!
//! Filtering and pagination live in `contracts::shared::list_query`; this
//! module only wires them to signals and the DOM.

use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::{ListPage, ListQuery, ListState, Searchable};
use leptos::prelude::*;
use std::future::Future;

use crate::shared::request_scope::RequestScope;

/// Signals and request scope backing one list page.
pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    pub query: RwSignal<ListQuery>,
    scope: StoredValue<RequestScope>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    /// Must be called inside the owning component so the scope closes with it.
    pub fn new(page_size: usize) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            query: RwSignal::new(ListQuery::with_page_size(page_size)),
            scope: StoredValue::new(RequestScope::for_component()),
        }
    }

    /// Starts a fetch. Only the newest response is applied.
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let state = self.state;
        state.update(|s| s.begin_load());
        scope.spawn(fetch, move |result| match result {
            Ok(records) => {
                log::debug!("List loaded: {} records", records.len());
                state.update(|s| s.finish_ok(records));
            }
            Err(e) => state.update(|s| s.finish_err(e.to_string())),
        });
    }

    /// Runs a write (save, delete) tied to the page. `apply` is skipped
    /// when the page has been closed before the response arrives.
    pub fn run<R, F, A>(&self, fut: F, apply: A)
    where
        R: 'static,
        F: Future<Output = R> + 'static,
        A: FnOnce(R) + 'static,
    {
        match self.scope.try_get_value() {
            Some(scope) => scope.run(fut, apply),
            None => log::debug!("List page closed, write not started"),
        }
    }

    /// Current visible page, recomputed on every query or data change.
    pub fn page(&self) -> Signal<ListPage<T>> {
        let state = self.state;
        let query = self.query;
        Signal::derive(move || state.with(|s| query.with(|q| s.view(q))))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn text(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.text.clone()))
    }

    pub fn status(&self) -> Signal<Option<String>> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.status.clone()))
    }

    /// Applies `f` to the loaded records without refetching.
    pub fn update_records(&self, f: impl FnOnce(&mut Vec<T>)) {
        self.state.update(|s| s.update_records(f));
    }

    pub fn set_text(&self, text: String) {
        self.query.update(|q| q.set_text(text));
    }

    pub fn set_status(&self, status: String) {
        self.query.update(|q| q.set_status(status));
    }

    pub fn set_page(&self, page: usize) {
        self.query.update(|q| q.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.query.update(|q| q.set_page_size(size));
    }
}

/// Splits `text` into `(segment, is_match)` parts for case-insensitive `query`.
///
/// Segment boundaries always fall on char boundaries of `text`.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(end) = match_at(text, pos, &needle) {
            if plain_start < pos {
                parts.push((&text[plain_start..pos], false));
            }
            parts.push((&text[pos..end], true));
            pos = end;
            plain_start = end;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        parts.push((&text[plain_start..], false));
    }
    parts
}

/// End byte of a match of `needle` starting at `start`, if any.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched >= needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

/// Text with the parts matching `query` wrapped in `<mark>`.
#[component]
pub fn Highlight(#[prop(into)] text: String, #[prop(into)] query: Signal<String>) -> impl IntoView {
    move || {
        let q = query.get();
        split_matches(&text, &q)
            .into_iter()
            .map(|(part, hit)| {
                let part = part.to_string();
                if hit {
                    view! { <mark class="search-highlight">{part}</mark> }.into_any()
                } else {
                    view! { <span>{part}</span> }.into_any()
                }
            })
            .collect_view()
    }
}

/// Search box that reports every keystroke, with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "検索...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="クリア"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Status select. The first option (すべて) clears the filter.
#[component]
pub fn StatusFilter(
    #[prop(into)] value: Signal<Option<String>>,
    /// `(status key, label)` pairs
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="status-filter"
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"すべて"</option>
            {options
                .into_iter()
                .map(|(key, label)| view! { <option value=key>{label}</option> })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(parts: &[(&str, bool)]) -> String {
        parts
            .iter()
            .map(|(p, hit)| if *hit { format!("[{}]", p) } else { p.to_string() })
            .collect()
    }

    #[test]
    fn test_closed_page_ignores_loads_and_writes() {
        use contracts::domain::a001_customer::aggregate::Customer;

        let owner = Owner::new();
        let list = owner.with(|| ListController::<Customer>::new(10));
        owner.cleanup();

        // Neither call may touch the disposed page state.
        list.load(async { Ok(Vec::new()) });
        list.run(async {}, |_: ()| panic!("write applied after the page closed"));
    }

    #[test]
    fn test_split_matches_case_insensitive() {
        let parts = split_matches("Tanaka Shoji TANAKA", "tanaka");
        assert_eq!(joined(&parts), "[Tanaka] Shoji [TANAKA]");
    }

    #[test]
    fn test_split_matches_multibyte() {
        let parts = split_matches("株式会社山田商事", "山田");
        assert_eq!(parts, vec![("株式会社", false), ("山田", true), ("商事", false)]);
    }

    #[test]
    fn test_split_matches_empty_query_and_no_hit() {
        assert_eq!(split_matches("abc", ""), vec![("abc", false)]);
        assert_eq!(split_matches("abc", "z"), vec![("abc", false)]);
        assert_eq!(split_matches("", "a"), Vec::<(&str, bool)>::new());
    }

    #[test]
    fn test_split_matches_covers_whole_text() {
        let text = "ÅbcÅBC";
        let parts = split_matches(text, "åb");
        let rebuilt: String = parts.iter().map(|(p, _)| *p).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(parts.iter().filter(|(_, hit)| *hit).count(), 2);
    }
}
