use leptos::prelude::*;
use thaw::Spinner;

/// Loading, error and empty handling shared by every list page.
///
/// While loading a spinner replaces the table. A failed load shows only the
/// error. An empty filtered result shows `empty_text` instead of the table.
#[component]
pub fn ListBody<F, V>(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] is_empty: Signal<bool>,
    #[prop(into)] empty_text: String,
    table: F,
) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let empty_text = StoredValue::new(empty_text);
    let table = StoredValue::new(table);

    move || {
        if loading.get() {
            view! {
                <div class="list-placeholder">
                    <Spinner label="読み込み中..." />
                </div>
            }
            .into_any()
        } else if let Some(message) = error.get() {
            view! { <div class="alert alert--error">{message}</div> }.into_any()
        } else if is_empty.get() {
            view! { <div class="list-placeholder list-placeholder--empty">{empty_text.get_value()}</div> }
                .into_any()
        } else {
            table.with_value(|render| render()).into_any()
        }
    }
}
