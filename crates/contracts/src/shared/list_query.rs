//! Client-side list filtering and pagination.
//!
//! Every list page keeps the full collection fetched on mount and derives the
//! visible page from it with [`ListState::view`]. Filtering is recomputed on
//! each keystroke.

use std::borrow::Cow;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Records that can be narrowed by the list search box and status filter.
pub trait Searchable {
    /// Text fields matched by the search box (one to three of them).
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Key compared against the status filter. `None` never matches a set filter.
    fn status_key(&self) -> Option<String> {
        None
    }
}

/// Case-insensitive substring match over the designated fields.
///
/// An empty query matches every record. The query is not trimmed.
pub fn matches_text<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_status<T: Searchable>(record: &T, status: Option<&str>) -> bool {
    match status {
        None => true,
        Some(wanted) => record.status_key().as_deref() == Some(wanted),
    }
}

/// Order-preserving filter by text and status.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| matches_text(*r, &query.text) && matches_status(*r, query.status.as_deref()))
        .collect()
}

/// Number of pages for `n` records, never less than one.
pub fn total_pages(n: usize, page_size: usize) -> usize {
    if n == 0 || page_size == 0 {
        1
    } else {
        n.div_ceil(page_size)
    }
}

/// Index range shown on page `page`: `[page*size, min((page+1)*size, n))`.
///
/// Out-of-range pages yield an empty range.
pub fn page_bounds(n: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size);
    if page_size == 0 || start >= n {
        return 0..0;
    }
    start..(start + page_size).min(n)
}

/// Current search text, status filter and page position of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub text: String,
    pub status: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            status: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        let mut query = Self::default();
        query.set_page_size(page_size);
        query
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page = 0;
    }

    /// Empty string clears the status filter.
    pub fn set_status(&mut self, status: impl Into<String>) {
        let status = status.into();
        self.status = if status.is_empty() { None } else { Some(status) };
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Unknown sizes fall back to [`DEFAULT_PAGE_SIZE`].
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        self.page = 0;
    }
}

/// Fetch lifecycle of a list page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

impl<T> ListState<T> {
    pub fn begin_load(&mut self) {
        *self = ListState::Loading;
    }

    pub fn finish_ok(&mut self, records: Vec<T>) {
        *self = ListState::Loaded(records);
    }

    /// Previous records are dropped so a failed reload never shows stale rows.
    pub fn finish_err(&mut self, message: impl Into<String>) {
        *self = ListState::Failed(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn records(&self) -> &[T] {
        match self {
            ListState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn update_records(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        if let ListState::Loaded(records) = self {
            f(records);
        }
    }
}

impl<T: Searchable + Clone> ListState<T> {
    /// Visible page for `query`. The page index is clamped into range.
    pub fn view(&self, query: &ListQuery) -> ListPage<T> {
        let all = self.records();
        let filtered = filter_records(all, query);
        let filtered_count = filtered.len();
        let pages = total_pages(filtered_count, query.page_size);
        let page = query.page.min(pages - 1);
        let bounds = page_bounds(filtered_count, page, query.page_size);
        let (from, to) = if bounds.is_empty() {
            (0, 0)
        } else {
            (bounds.start + 1, bounds.end)
        };
        let rows = filtered[bounds].iter().map(|r| (*r).clone()).collect();

        ListPage {
            rows,
            filtered_count,
            total_count: all.len(),
            page,
            total_pages: pages,
            from,
            to,
        }
    }
}

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first visible row, 0 when empty.
    pub from: usize,
    pub to: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// `"{from}-{to} / {count}"`
    pub fn range_label(&self) -> String {
        format!("{}-{} / {}", self.from, self.to, self.filtered_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: String,
        name: String,
        contact: String,
        status: String,
    }

    fn row(code: &str, name: &str, contact: &str, status: &str) -> Row {
        Row {
            code: code.into(),
            name: name.into(),
            contact: contact.into(),
            status: status.into(),
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![
                Cow::from(self.code.as_str()),
                Cow::from(self.name.as_str()),
                Cow::from(self.contact.as_str()),
            ]
        }

        fn status_key(&self) -> Option<String> {
            Some(self.status.clone())
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("C001", "Yamada Shoji", "佐藤", "active"),
            row("C002", "Suzuki Trading", "Yamada Hanako", "inactive"),
            row("C003", "田中商店", "田中", "active"),
            row("YAM-9", "Kato Foods", "加藤", "active"),
        ]
    }

    #[test]
    fn test_text_filter_is_case_insensitive_over_all_fields() {
        let rows = sample();
        let mut query = ListQuery::default();
        query.set_text("yamada");
        let found: Vec<&str> = filter_records(&rows, &query)
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(found, vec!["C001", "C002"]);

        query.set_text("YAM");
        assert_eq!(filter_records(&rows, &query).len(), 3);
    }

    #[test]
    fn test_text_filter_exactness() {
        let rows = sample();
        for needle in ["", "a", "田中", "trad", "zzz", " "] {
            let mut query = ListQuery::default();
            query.set_text(needle);
            let got = filter_records(&rows, &query);
            let expected: Vec<&Row> = rows
                .iter()
                .filter(|r| {
                    let n = needle.to_lowercase();
                    r.code.to_lowercase().contains(&n)
                        || r.name.to_lowercase().contains(&n)
                        || r.contact.to_lowercase().contains(&n)
                })
                .collect();
            assert_eq!(got, expected, "needle {:?}", needle);
        }
    }

    #[test]
    fn test_status_filter_is_exact() {
        let rows = sample();
        let mut query = ListQuery::default();
        query.set_status("inactive");
        assert_eq!(filter_records(&rows, &query).len(), 1);
        query.set_status("activ");
        assert!(filter_records(&rows, &query).is_empty());
        query.set_status("");
        assert_eq!(filter_records(&rows, &query).len(), 4);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(23, 0, 10), 0..10);
        assert_eq!(page_bounds(23, 1, 10), 10..20);
        assert_eq!(page_bounds(23, 2, 10), 20..23);
        assert_eq!(page_bounds(23, 3, 10), 0..0);
        assert_eq!(page_bounds(0, 0, 10), 0..0);
        assert_eq!(page_bounds(5, 0, 0), 0..0);
        for n in 0..30 {
            for p in [5, 10, 25, 50] {
                for i in 0..8 {
                    let r = page_bounds(n, i, p);
                    if i * p < n {
                        assert_eq!(r, i * p..((i + 1) * p).min(n));
                    } else {
                        assert!(r.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(50, 5), 10);
    }

    #[test]
    fn test_query_changes_reset_page() {
        let mut query = ListQuery::default();
        query.set_page(3);
        query.set_text("x");
        assert_eq!(query.page, 0);
        query.set_page(2);
        query.set_page_size(25);
        assert_eq!((query.page, query.page_size), (0, 25));
        query.set_page_size(7);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_view_paginates_filtered_rows() {
        let rows: Vec<Row> = (0..23)
            .map(|i| row(&format!("C{:03}", i), "name", "", "active"))
            .collect();
        let mut state = ListState::Idle;
        state.finish_ok(rows);

        let mut query = ListQuery::default();
        query.set_page(2);
        let page = state.view(&query);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.rows[0].code, "C020");
        assert_eq!(page.range_label(), "21-23 / 23");
        assert_eq!(page.total_pages, 3);

        query.set_page(9);
        let clamped = state.view(&query);
        assert_eq!(clamped.page, 2);
    }

    #[test]
    fn test_empty_result_is_flagged() {
        let mut state = ListState::Idle;
        state.finish_ok(sample());
        let mut query = ListQuery::default();
        query.set_text("存在しない");
        let page = state.view(&query);
        assert!(page.is_empty());
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 4);
        assert_eq!(page.range_label(), "0-0 / 0");
    }

    #[test]
    fn test_failed_reload_drops_stale_rows() {
        let mut state = ListState::Idle;
        state.finish_ok(sample());
        state.begin_load();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        state.finish_err("サーバーエラー");
        assert_eq!(state.error(), Some("サーバーエラー"));
        assert!(state.view(&ListQuery::default()).rows.is_empty());
    }

    #[test]
    fn test_update_records_only_when_loaded() {
        let mut state: ListState<Row> = ListState::Failed("x".into());
        state.update_records(|r| r.push(row("Z", "", "", "")));
        assert!(state.records().is_empty());

        state.finish_ok(sample());
        state.update_records(|r| r.retain(|x| x.code != "C001"));
        assert_eq!(state.records().len(), 3);
    }
}
