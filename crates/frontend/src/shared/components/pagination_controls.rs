use crate::shared::icons::icon;
use contracts::shared::list_query::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// PaginationControls component - page navigation, range text and page size selector
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Range text, e.g. `"1-10 / 50"`
    #[prop(into)]
    range_label: Signal<String>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (defaults to 5/10/25/50)
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <label class="pagination-size">
                <span>"表示件数:"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(val) = event_target_value(&ev).parse() {
                            on_page_size_change.run(val);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">{move || range_label.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="最初のページ"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="前のページ"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="次のページ"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=is_last
                title="最後のページ"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
