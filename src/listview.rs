/// List View Engine.
///
/// The filter -> sort -> paginate pipeline behind every entity table in the
/// dashboard. Each page supplies its own column/filter configuration; the
/// pipeline itself is shared. It never mutates the collection it is given:
/// every call derives a fresh page over whatever rows the caller currently
/// holds, so refetching after a mutation is just "replace the rows and
/// recompute".

use std::cmp::Ordering;

use log::warn;

use crate::schema::Record;
use crate::value::Value;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A single sort key: a field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F> SortKey<F> {
    pub fn ascending(field: F) -> Self {
        SortKey {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        SortKey {
            field,
            order: SortOrder::Descending,
        }
    }
}

/// The sort state a table header exposes: at most one active column, cycling
/// none -> ascending -> descending -> none on repeated clicks. Clicking a
/// different column replaces the active sort.
#[derive(Debug, Clone, Copy)]
pub struct SortState<F: Copy + Eq> {
    active: Option<SortKey<F>>,
}

impl<F: Copy + Eq> Default for SortState<F> {
    fn default() -> Self {
        SortState::new()
    }
}

impl<F: Copy + Eq> SortState<F> {
    pub fn new() -> Self {
        SortState { active: None }
    }

    /// Advances the toggle cycle for a header click on `field`.
    pub fn toggle(&mut self, field: F) {
        self.active = match self.active {
            Some(SortKey {
                field: f,
                order: SortOrder::Ascending,
            }) if f == field => Some(SortKey::descending(field)),
            Some(SortKey {
                field: f,
                order: SortOrder::Descending,
            }) if f == field => None,
            _ => Some(SortKey::ascending(field)),
        };
    }

    /// Current direction of `field`, for rendering the header indicator.
    pub fn direction_of(&self, field: F) -> Option<SortOrder> {
        self.active
            .filter(|key| key.field == field)
            .map(|key| key.order)
    }

    /// The active sort as a key list for [`compute_visible_rows`].
    pub fn keys(&self) -> &[SortKey<F>] {
        self.active.as_ref().map(std::slice::from_ref).unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// How a per-field filter matches a cell value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive substring match. An empty pattern matches everything,
    /// so a cleared filter input needs no special casing by the page.
    Contains(String),
    /// Case-insensitive exact match, for enumerated status fields.
    Equals(String),
    /// Arbitrary predicate over the cell value, for filters that are not
    /// string comparisons (the stock availability filter).
    Where(fn(&Value) -> bool),
}

impl Matcher {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Matcher::Contains(pattern) => value.contains_ci(pattern),
            Matcher::Equals(pattern) => pattern.is_empty() || value.equals_ci(pattern),
            Matcher::Where(pred) => pred(value),
        }
    }
}

/// One active per-field filter.
#[derive(Debug, Clone)]
pub struct FieldFilter<F> {
    pub field: F,
    pub matcher: Matcher,
}

/// The active filter set of a page: one free-text search over a fixed set of
/// fields, plus any number of per-field filters. A row passes iff it passes
/// every active predicate; with nothing active, every row passes.
pub struct FilterSet<R: Record> {
    search: String,
    search_fields: Vec<R::Field>,
    filters: Vec<FieldFilter<R::Field>>,
}

impl<R: Record> Clone for FilterSet<R> {
    fn clone(&self) -> Self {
        FilterSet {
            search: self.search.clone(),
            search_fields: self.search_fields.clone(),
            filters: self.filters.clone(),
        }
    }
}

impl<R: Record> FilterSet<R> {
    pub fn new(search_fields: Vec<R::Field>) -> Self {
        FilterSet {
            search: String::new(),
            search_fields,
            filters: Vec::new(),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Installs or replaces the filter on `field`.
    pub fn set_filter(&mut self, field: R::Field, matcher: Matcher) {
        self.clear_filter(field);
        self.filters.push(FieldFilter { field, matcher });
    }

    pub fn clear_filter(&mut self, field: R::Field) {
        self.filters.retain(|f| f.field != field);
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.filters.is_empty()
    }

    pub fn matches(&self, row: &R) -> bool {
        if !self.search.is_empty() {
            let hit = self
                .search_fields
                .iter()
                .any(|&field| row.get(field).contains_ci(&self.search));
            if !hit {
                return false;
            }
        }

        self.filters
            .iter()
            .all(|f| f.matcher.matches(&row.get(f.field)))
    }
}

/// Current page index and size. `page_index` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Pagination {
            page_index: 0,
            page_size,
        }
    }

    /// Number of pages for `total` rows, never less than 1 so an empty
    /// collection still renders as "page 1 of 1".
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(10)
    }
}

/// The derived view: the rows of the current page plus pagination metadata.
pub struct Page<'a, R> {
    pub rows: Vec<&'a R>,
    /// Total rows after filtering, before pagination.
    pub total: usize,
    pub page_count: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Runs the full pipeline: filter, stable sort, paginate.
///
/// Ties under the sort keys keep their input order, and an empty key list
/// preserves input order entirely. A page index past the filtered collection
/// yields an empty page rather than an error; the caller decides whether to
/// reset to page 0.
///
/// # Panics
///
/// Panics if `pagination.page_size` is zero. That is a configuration bug in
/// the calling page, not a data condition.
///
/// # Examples
///
/// ```
/// use apotik_admin::entity::{Product, ProductField};
/// use apotik_admin::listview::{compute_visible_rows, FilterSet, Pagination, SortKey};
///
/// let rows = vec![
///     Product::sample(1, "B", "obat", 1000.0, 5),
///     Product::sample(2, "A", "obat", 2000.0, 0),
/// ];
/// let filters = FilterSet::new(Product::search_fields());
/// let sort = [SortKey::ascending(ProductField::Name)];
///
/// let page = compute_visible_rows(&rows, &filters, &sort, Pagination::new(10));
/// assert_eq!(page.rows[0].id, 2);
/// assert_eq!(page.rows[1].id, 1);
/// assert_eq!(page.page_count, 1);
/// ```
pub fn compute_visible_rows<'a, R: Record>(
    rows: &'a [R],
    filters: &FilterSet<R>,
    sort: &[SortKey<R::Field>],
    pagination: Pagination,
) -> Page<'a, R> {
    assert!(pagination.page_size > 0, "page_size must be positive");

    let mut index: Vec<usize> = (0..rows.len())
        .filter(|&i| filters.matches(&rows[i]))
        .collect();

    if !sort.is_empty() {
        // Vec::sort_by is stable, which is what keeps equal-key rows in
        // their original relative order.
        index.sort_by(|&a, &b| {
            for key in sort {
                let cmp = rows[a].get(key.field).compare(&rows[b].get(key.field));
                let cmp = match key.order {
                    SortOrder::Ascending => cmp,
                    SortOrder::Descending => cmp.reverse(),
                };
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            Ordering::Equal
        });
    }

    let total = index.len();
    let page_count = pagination.page_count(total);
    let start = pagination
        .page_index
        .saturating_mul(pagination.page_size)
        .min(total);
    let end = (start + pagination.page_size).min(total);

    Page {
        rows: index[start..end].iter().map(|&i| &rows[i]).collect(),
        total,
        page_count,
        can_prev: pagination.page_index > 0,
        can_next: pagination.page_index + 1 < page_count,
    }
}

/// Identifier of one fetch issued through [`ListState::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchId(u64);

/// Caller-owned view state for one entity page: the fetched rows plus the
/// search/filter/sort/pagination state the page mutates, with [`visible`]
/// deriving the current page through [`compute_visible_rows`].
///
/// Changing the search or a filter resets to page 0 so a shrunken collection
/// never strands the user on an empty page.
///
/// Refetch-after-mutate is guarded against stale responses: every fetch gets
/// an id from [`begin_fetch`], and [`apply_fetch`] only installs the result
/// of the newest outstanding fetch. A slower, superseded fetch resolving late
/// is discarded instead of overwriting fresher data.
///
/// [`visible`]: ListState::visible
/// [`begin_fetch`]: ListState::begin_fetch
/// [`apply_fetch`]: ListState::apply_fetch
pub struct ListState<R: Record> {
    rows: Vec<R>,
    filters: FilterSet<R>,
    sort: SortState<R::Field>,
    pagination: Pagination,
    last_issued: u64,
}

impl<R: Record> ListState<R> {
    pub fn new(search_fields: Vec<R::Field>) -> Self {
        ListState {
            rows: Vec::new(),
            filters: FilterSet::new(search_fields),
            sort: SortState::new(),
            pagination: Pagination::default(),
            last_issued: 0,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replaces the collection immediately, superseding any outstanding fetch.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.last_issued += 1;
        self.rows = rows;
    }

    /// Registers a new fetch and returns its id. Issuing a fetch supersedes
    /// every earlier one that has not resolved yet.
    pub fn begin_fetch(&mut self) -> FetchId {
        self.last_issued += 1;
        FetchId(self.last_issued)
    }

    /// Installs the result of a fetch. Returns false, leaving the rows
    /// untouched, when a newer fetch has been issued since `id`.
    pub fn apply_fetch(&mut self, id: FetchId, rows: Vec<R>) -> bool {
        if id.0 != self.last_issued {
            warn!(
                "discarding stale fetch result: request {} superseded by {}",
                id.0, self.last_issued
            );
            return false;
        }
        self.rows = rows;
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.set_search(search);
        self.pagination.page_index = 0;
    }

    pub fn set_filter(&mut self, field: R::Field, matcher: Matcher) {
        self.filters.set_filter(field, matcher);
        self.pagination.page_index = 0;
    }

    pub fn clear_filter(&mut self, field: R::Field) {
        self.filters.clear_filter(field);
        self.pagination.page_index = 0;
    }

    pub fn filters(&self) -> &FilterSet<R> {
        &self.filters
    }

    pub fn toggle_sort(&mut self, field: R::Field) {
        self.sort.toggle(field);
    }

    pub fn sort(&self) -> &SortState<R::Field> {
        &self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size;
        self.pagination.page_index = 0;
    }

    pub fn next_page(&mut self) {
        if self.visible().can_next {
            self.pagination.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.pagination.page_index > 0 {
            self.pagination.page_index -= 1;
        }
    }

    /// Derives the current page.
    pub fn visible(&self) -> Page<'_, R> {
        compute_visible_rows(&self.rows, &self.filters, self.sort.keys(), self.pagination)
    }
}
