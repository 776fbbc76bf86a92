//! List-page state shared by every entity table
//!
//! A list page owns one [`ListState`]: the displayed window of the result set,
//! the sort column, the filter rows and a reload counter. Effects in the UI
//! depend on [`ListState::list_key`] and [`ListState::count_key`] only, so
//! changes that do not alter a key (selection, loading flags) never re-fetch.

use super::filter::{encode_filters, FilterRow};
use super::query::{CountQuery, ListQuery};
use serde::{Deserialize, Serialize};

/// Window sizes offered by the range panel
pub const RANGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_RANGE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            OrderDirection::Asc => OrderDirection::Desc,
            OrderDirection::Desc => OrderDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, OrderDirection::Asc)
    }
}

/// How a list narrows its result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Composable filter rows over these fields, sent as `filters`
    Rows(&'static [&'static str]),
    /// A single name substring, sent as `nameSubstring`
    NameSubstring,
}

/// Static description of a listed entity: endpoints, sort keys, filter mode
pub trait ListedEntity: Clone + 'static {
    const LIST_PATH: &'static str;
    const COUNT_PATH: &'static str;
    const SORT_KEYS: &'static [&'static str];
    const DEFAULT_SORT: &'static str;
    const FILTER_MODE: FilterMode;
}

/// Pagination window `(min, range, count)`
///
/// `min` is the index of the first displayed record, `range` the window size
/// and `count` the total number of matching records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub min: usize,
    pub range: usize,
    pub count: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE)
    }
}

impl Window {
    pub fn new(range: usize) -> Self {
        Self {
            min: 0,
            range: range.max(1),
            count: 0,
        }
    }

    /// Exclusive upper bound sent to the server
    pub fn max(&self) -> usize {
        self.min + self.range
    }

    pub fn can_forward(&self) -> bool {
        self.min + self.range < self.count
    }

    pub fn can_back(&self) -> bool {
        self.min > 0
    }

    pub fn forward(&mut self) {
        if self.can_forward() {
            self.min += self.range;
        }
    }

    /// Step back one window, landing on 0 instead of going negative
    pub fn back(&mut self) {
        self.min = self.min.saturating_sub(self.range);
    }

    pub fn reset(&mut self) {
        self.min = 0;
    }

    pub fn set_range(&mut self, range: usize) {
        self.range = range.max(1);
        self.min = 0;
    }

    /// Store a fresh count, pulling `min` back inside the result set
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.min >= count {
            self.min = if count == 0 {
                0
            } else {
                (count - 1) / self.range * self.range
            };
        }
    }

    /// 1-based index of the first displayed record (0 when empty)
    pub fn first_shown(&self) -> usize {
        if self.count == 0 {
            0
        } else {
            self.min + 1
        }
    }

    /// 1-based index of the last displayed record
    pub fn last_shown(&self) -> usize {
        self.max().min(self.count)
    }

    /// `range` query parameter: `min;max`
    pub fn range_param(&self) -> String {
        format!("{};{}", self.min, self.max())
    }

    /// Label for the range panel, e.g. `51–100 of 230`
    pub fn label(&self) -> String {
        format!(
            "{}–{} of {}",
            self.first_shown(),
            self.last_shown(),
            self.count
        )
    }
}

/// Tags requests so that only the newest response is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Start a request and return its generation
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest == generation
    }
}

/// Request key for the list effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKey {
    pub query: ListQuery,
    pub reload: u64,
}

/// Request key for the count effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountKey {
    pub query: CountQuery,
    pub reload: u64,
}

#[derive(Debug, Clone)]
pub struct ListState<T: ListedEntity> {
    pub items: Vec<T>,
    pub loaded: bool,
    /// Last list failure, cleared by the next successful list response
    pub list_error: Option<String>,
    /// Last count failure, cleared by the next successful count response
    pub count_error: Option<String>,
    pub window: Window,
    pub order_by: String,
    pub order_direction: OrderDirection,
    pub filters: Vec<FilterRow>,
    pub name_substring: String,
    reload: u64,
    list_requests: RequestTracker,
    count_requests: RequestTracker,
}

impl<T: ListedEntity> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            list_error: None,
            count_error: None,
            window: Window::default(),
            order_by: T::DEFAULT_SORT.to_string(),
            order_direction: OrderDirection::Asc,
            filters: Vec::new(),
            name_substring: String::new(),
            reload: 0,
            list_requests: RequestTracker::default(),
            count_requests: RequestTracker::default(),
        }
    }
}

impl<T: ListedEntity> ListState<T> {
    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Same key flips direction, a new key sorts ascending
    pub fn toggle_sort(&mut self, key: &str) {
        if !T::SORT_KEYS.contains(&key) {
            return;
        }
        if self.order_by == key {
            self.order_direction = self.order_direction.toggled();
        } else {
            self.order_by = key.to_string();
            self.order_direction = OrderDirection::Asc;
        }
        self.window.reset();
    }

    // ------------------------------------------------------------------
    // Filters (every change restarts at the first window)
    // ------------------------------------------------------------------

    pub fn add_filter(&mut self) {
        self.filters.push(FilterRow::new());
        self.window.reset();
    }

    pub fn remove_filter(&mut self, index: usize) {
        if index < self.filters.len() {
            self.filters.remove(index);
            self.window.reset();
        }
    }

    pub fn set_filter_value(&mut self, index: usize, field: &str, value: &str) {
        if let Some(row) = self.filters.get_mut(index) {
            row.set(field, value);
            self.window.reset();
        }
    }

    pub fn set_filters(&mut self, filters: Vec<FilterRow>) {
        self.filters = filters;
        self.window.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.name_substring.clear();
        self.window.reset();
    }

    pub fn set_name_substring(&mut self, value: &str) {
        if self.name_substring != value {
            self.name_substring = value.to_string();
            self.window.reset();
        }
    }

    /// Rows with at least one value, plus the name search when set
    pub fn active_filters_count(&self) -> usize {
        let rows = self.filters.iter().filter(|row| !row.is_empty()).count();
        rows + usize::from(!self.name_substring.is_empty())
    }

    /// Value of the `filters` parameter for row-filtered entities
    pub fn encoded_filters(&self) -> Option<String> {
        match T::FILTER_MODE {
            FilterMode::Rows(fields) => Some(encode_filters(fields, &self.filters)),
            FilterMode::NameSubstring => None,
        }
    }

    fn name_substring_param(&self) -> Option<String> {
        match T::FILTER_MODE {
            FilterMode::Rows(_) => None,
            FilterMode::NameSubstring => Some(self.name_substring.clone()),
        }
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    pub fn forward(&mut self) {
        self.window.forward();
    }

    pub fn back(&mut self) {
        self.window.back();
    }

    pub fn set_range(&mut self, range: usize) {
        self.window.set_range(range);
    }

    // ------------------------------------------------------------------
    // Reload
    // ------------------------------------------------------------------

    /// Force one re-fetch of both list and count
    pub fn request_reload(&mut self) {
        self.reload = self.reload.wrapping_add(1);
    }

    pub fn list_key(&self) -> ListKey {
        ListKey {
            query: ListQuery {
                range: self.window.range_param(),
                order_by: self.order_by.clone(),
                order_direction: self.order_direction,
                filters: self.encoded_filters(),
                name_substring: self.name_substring_param(),
            },
            reload: self.reload,
        }
    }

    pub fn count_key(&self) -> CountKey {
        CountKey {
            query: CountQuery {
                filters: self.encoded_filters(),
                name_substring: self.name_substring_param(),
            },
            reload: self.reload,
        }
    }

    // ------------------------------------------------------------------
    // Responses
    // ------------------------------------------------------------------

    pub fn begin_list_request(&mut self) -> u64 {
        self.loaded = false;
        self.list_requests.begin()
    }

    pub fn begin_count_request(&mut self) -> u64 {
        self.count_requests.begin()
    }

    /// Apply a list response; returns false when it was superseded
    pub fn apply_list(&mut self, generation: u64, result: Result<Vec<T>, String>) -> bool {
        if !self.list_requests.is_current(generation) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.list_error = None;
            }
            Err(e) => self.list_error = Some(e),
        }
        true
    }

    /// Apply a count response; returns false when it was superseded
    pub fn apply_count(&mut self, generation: u64, result: Result<usize, String>) -> bool {
        if !self.count_requests.is_current(generation) {
            return false;
        }
        match result {
            Ok(count) => {
                self.window.set_count(count);
                self.count_error = None;
            }
            Err(e) => self.count_error = Some(e),
        }
        true
    }

    /// A list request is in flight and has not failed
    pub fn is_loading(&self) -> bool {
        !self.loaded && self.list_error.is_none()
    }

    /// Banner text: list and count failures, one per line
    pub fn error(&self) -> Option<String> {
        match (&self.list_error, &self.count_error) {
            (None, None) => None,
            (Some(e), None) | (None, Some(e)) => Some(e.clone()),
            (Some(list), Some(count)) => Some(format!("{}\n{}", list, count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Part(&'static str);

    impl ListedEntity for Part {
        const LIST_PATH: &'static str = "/api/part_list";
        const COUNT_PATH: &'static str = "/api/part_count";
        const SORT_KEYS: &'static [&'static str] = &["name", "type"];
        const DEFAULT_SORT: &'static str = "name";
        const FILTER_MODE: FilterMode = FilterMode::Rows(&["name", "type"]);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Kind;

    impl ListedEntity for Kind {
        const LIST_PATH: &'static str = "/api/kind_list";
        const COUNT_PATH: &'static str = "/api/kind_count";
        const SORT_KEYS: &'static [&'static str] = &["name"];
        const DEFAULT_SORT: &'static str = "name";
        const FILTER_MODE: FilterMode = FilterMode::NameSubstring;
    }

    fn window(min: usize, range: usize, count: usize) -> Window {
        Window { min, range, count }
    }

    #[test]
    fn test_forward_only_while_more_records() {
        let mut w = window(0, 10, 25);
        assert!(w.can_forward());
        w.forward();
        assert_eq!(w.min, 10);
        w.forward();
        assert_eq!(w.min, 20);
        assert!(!w.can_forward());
        w.forward();
        assert_eq!(w.min, 20);
    }

    #[test]
    fn test_forward_disabled_at_exact_boundary() {
        let w = window(10, 10, 20);
        assert!(!w.can_forward());
    }

    #[test]
    fn test_back_resets_to_zero_instead_of_negative() {
        let mut w = window(7, 10, 100);
        w.back();
        assert_eq!(w.min, 0);
        w.back();
        assert_eq!(w.min, 0);
        assert!(!w.can_back());
    }

    #[test]
    fn test_set_count_pulls_min_inside() {
        let mut w = window(40, 10, 50);
        w.set_count(23);
        assert_eq!(w.min, 20);
        w.set_count(0);
        assert_eq!(w.min, 0);

        let mut w = window(20, 10, 50);
        w.set_count(20);
        assert_eq!(w.min, 10);
    }

    #[test]
    fn test_window_never_exceeds_count() {
        for count in 0..40 {
            let mut w = window(0, 7, count);
            for _ in 0..10 {
                w.forward();
                assert!(w.first_shown() <= w.count);
                assert!(w.last_shown() <= w.count);
            }
            for _ in 0..10 {
                w.back();
                assert!(w.min <= w.count);
            }
            assert_eq!(w.min, 0);
        }
    }

    #[test]
    fn test_range_param_and_label() {
        let w = window(50, 50, 230);
        assert_eq!(w.range_param(), "50;100");
        assert_eq!(w.label(), "51–100 of 230");
        assert_eq!(window(0, 50, 0).label(), "0–0 of 0");
        assert_eq!(window(200, 50, 230).label(), "201–230 of 230");
    }

    #[test]
    fn test_set_range_resets_min() {
        let mut w = window(30, 10, 100);
        w.set_range(25);
        assert_eq!((w.min, w.range), (0, 25));
        w.set_range(0);
        assert_eq!(w.range, 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut s = ListState::<Part>::default();
        s.window = window(20, 10, 100);
        s.toggle_sort("name");
        assert_eq!(s.order_direction, OrderDirection::Desc);
        assert_eq!(s.window.min, 0);

        s.toggle_sort("type");
        assert_eq!(s.order_by, "type");
        assert_eq!(s.order_direction, OrderDirection::Asc);

        s.toggle_sort("comments");
        assert_eq!(s.order_by, "type");
    }

    #[test]
    fn test_filter_change_resets_min() {
        let mut s = ListState::<Part>::default();
        s.window = window(30, 10, 100);
        s.add_filter();
        assert_eq!(s.window.min, 0);

        s.window.min = 30;
        s.set_filter_value(0, "name", "amp");
        assert_eq!(s.window.min, 0);
        assert_eq!(s.encoded_filters().as_deref(), Some("amp,"));

        s.window.min = 30;
        s.remove_filter(0);
        assert_eq!(s.window.min, 0);
        assert_eq!(s.encoded_filters().as_deref(), Some(""));
    }

    #[test]
    fn test_out_of_range_filter_index_is_ignored() {
        let mut s = ListState::<Part>::default();
        s.window.min = 30;
        s.set_filter_value(3, "name", "x");
        s.remove_filter(3);
        assert_eq!(s.window.min, 30);
    }

    #[test]
    fn test_name_substring_mode() {
        let mut s = ListState::<Kind>::default();
        s.set_name_substring("fee");
        let key = s.count_key();
        assert_eq!(key.query.filters, None);
        assert_eq!(key.query.name_substring.as_deref(), Some("fee"));
        assert_eq!(s.active_filters_count(), 1);
    }

    #[test]
    fn test_reload_changes_keys_exactly_once() {
        let mut s = ListState::<Part>::default();
        let list_before = s.list_key();
        let count_before = s.count_key();

        s.request_reload();
        let list_after = s.list_key();
        assert_ne!(list_before, list_after);
        assert_ne!(count_before, s.count_key());

        // Nothing else changed: the key is stable until the next mutation.
        assert_eq!(list_after, s.list_key());

        s.request_reload();
        assert_ne!(list_after, s.list_key());
        assert_ne!(list_before, s.list_key());
    }

    #[test]
    fn test_paging_does_not_change_count_key() {
        let mut s = ListState::<Part>::default();
        s.window.count = 500;
        let count_key = s.count_key();
        let list_key = s.list_key();
        s.forward();
        assert_eq!(count_key, s.count_key());
        assert_ne!(list_key, s.list_key());
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        let mut s = ListState::<Part>::default();
        let first = s.begin_list_request();
        let second = s.begin_list_request();

        assert!(s.apply_list(second, Ok(vec![Part("new")])));
        assert!(!s.apply_list(first, Ok(vec![Part("old")])));
        assert_eq!(s.items, vec![Part("new")]);
        assert!(s.loaded);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_data() {
        let mut s = ListState::<Part>::default();
        let g = s.begin_list_request();
        s.apply_list(g, Ok(vec![Part("a")]));

        let g = s.begin_list_request();
        s.apply_list(g, Err("HTTP 500".to_string()));
        assert!(!s.loaded);
        assert_eq!(s.items, vec![Part("a")]);
        assert_eq!(s.list_error.as_deref(), Some("HTTP 500"));
        assert_eq!(s.error().as_deref(), Some("HTTP 500"));
        assert!(!s.is_loading());
    }

    #[test]
    fn test_count_failure_survives_list_success() {
        let mut s = ListState::<Part>::default();
        s.window = window(0, 10, 40);

        let count = s.begin_count_request();
        let list = s.begin_list_request();
        assert!(s.apply_count(count, Err("HTTP 502".to_string())));
        assert!(s.is_loading());

        assert!(s.apply_list(list, Ok(vec![Part("a")])));
        assert_eq!(s.error().as_deref(), Some("HTTP 502"));
        assert_eq!(s.window.count, 40);

        let count = s.begin_count_request();
        assert!(s.apply_count(count, Ok(12)));
        assert_eq!(s.error(), None);
        assert_eq!(s.window.count, 12);
    }

    #[test]
    fn test_both_failures_are_reported() {
        let mut s = ListState::<Part>::default();
        let count = s.begin_count_request();
        let list = s.begin_list_request();
        s.apply_list(list, Err("list down".to_string()));
        s.apply_count(count, Err("count down".to_string()));
        assert_eq!(s.error().as_deref(), Some("list down\ncount down"));
    }

    #[test]
    fn test_count_response_clamps_window() {
        let mut s = ListState::<Part>::default();
        s.window = window(100, 50, 200);
        let g = s.begin_count_request();
        assert!(s.apply_count(g, Ok(60)));
        assert_eq!(s.window.min, 50);
        assert_eq!(s.window.count, 60);
    }
}
