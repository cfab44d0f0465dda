//! Offset/limit pagination over an in-memory sequence

use serde::Serialize;

/// Page size used when `limit` is absent or unusable
pub const DEFAULT_LIMIT: usize = 20;

/// Offset used when `offset` is absent or unusable
pub const DEFAULT_OFFSET: usize = 0;

/// A pagination window
///
/// Parsing is lenient: anything that is not a non-negative integer falls back
/// to the default. A zero limit also falls back, since it could never advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: usize,
    offset: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageWindow {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            offset,
        }
    }

    /// Parse raw `limit` and `offset` query values
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_OFFSET);

        Self::new(limit, offset)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window following this one, if it does not already reach `total`
    pub fn next(&self, total: usize) -> Option<Self> {
        let next_offset = self.offset.saturating_add(self.limit);
        (next_offset < total).then(|| Self::new(self.limit, next_offset))
    }

    /// Window preceding this one, clamped at offset zero
    pub fn previous(&self) -> Option<Self> {
        (self.offset > 0).then(|| Self::new(self.limit, self.offset.saturating_sub(self.limit)))
    }

    /// Query-string fragment encoding this window, e.g. `?limit=20&offset=40`
    pub fn to_query_fragment(&self) -> String {
        format!("?limit={}&offset={}", self.limit, self.offset)
    }
}

/// One page of results plus cursor links
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Slice `items` to `window`, keeping the pre-pagination count
pub fn paginate<T>(items: Vec<T>, window: PageWindow) -> Page<T> {
    let count = items.len();
    let results = items
        .into_iter()
        .skip(window.offset())
        .take(window.limit())
        .collect();

    Page {
        count,
        next: window.next(count).map(|w| w.to_query_fragment()),
        previous: window.previous().map(|w| w.to_query_fragment()),
        results,
    }
}
