//! Pagination for the category list

/// Maximum rows per request
pub const MAX_COUNT: i64 = 10;

/// Rows returned when `count` is missing or out of range
pub const DEFAULT_COUNT: i64 = 10;

/// Effective LIMIT/OFFSET for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip (>= 0)
    pub start: i64,
    /// Rows to return (1..=10)
    pub count: i64,
}

impl Pagination {
    /// Create pagination with clamping.
    ///
    /// - `count` outside 1..=10 becomes 10 (it is replaced, not clamped to the bound)
    /// - `start` below 0 becomes 0
    pub fn new(start: i64, count: i64) -> Self {
        let count = if (1..=MAX_COUNT).contains(&count) {
            count
        } else {
            DEFAULT_COUNT
        };

        Self {
            start: start.max(0),
            count,
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.start
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.count
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            start: 0,
            count: DEFAULT_COUNT,
        }
    }
}

/// Raw query parameters for `GET /categories`.
///
/// Kept as strings so that garbage input degrades to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl ListParams {
    /// Read `count` and `start` from a raw query string.
    ///
    /// The first occurrence of a repeated key wins and unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            count: first("count"),
            start: first("start"),
        }
    }
}

impl From<ListParams> for Pagination {
    fn from(params: ListParams) -> Self {
        Self::new(lenient_int(params.start), lenient_int(params.count))
    }
}

/// Missing or unparsable integers read as 0, including values that overflow
/// an i64, so a huge `start` lists from the beginning.
fn lenient_int(raw: Option<String>) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: Option<&str>, start: Option<&str>) -> ListParams {
        ListParams {
            count: count.map(str::to_owned),
            start: start.map(str::to_owned),
        }
    }

    #[test]
    fn keeps_valid_values() {
        for count in 1..=10 {
            let p = Pagination::new(5, count);
            assert_eq!(p.limit(), count);
            assert_eq!(p.offset(), 5);
        }
    }

    #[test]
    fn out_of_range_count_becomes_ten() {
        for count in [0, -1, 11, 50, i64::MAX, i64::MIN] {
            assert_eq!(Pagination::new(0, count).count, 10, "count {count}");
        }
    }

    #[test]
    fn negative_start_becomes_zero() {
        assert_eq!(Pagination::new(-1, 5).start, 0);
        assert_eq!(Pagination::new(i64::MIN, 5).start, 0);
    }

    #[test]
    fn missing_params_use_defaults() {
        let p = Pagination::from(ListParams::default());
        assert_eq!(p, Pagination::default());
        assert_eq!(p, Pagination { start: 0, count: 10 });
    }

    #[test]
    fn unparsable_params_use_defaults() {
        let p = Pagination::from(params(Some("lots"), Some("first")));
        assert_eq!(p, Pagination { start: 0, count: 10 });

        let p = Pagination::from(params(Some(""), Some("1.5")));
        assert_eq!(p, Pagination { start: 0, count: 10 });
    }

    #[test]
    fn overflowing_params_read_as_zero() {
        let p = Pagination::from(params(Some("5"), Some("99999999999999999999")));
        assert_eq!(p, Pagination { start: 0, count: 5 });

        let p = Pagination::from(params(Some("-99999999999999999999"), None));
        assert_eq!(p, Pagination { start: 0, count: 10 });
    }

    #[test]
    fn reads_query_string() {
        let p = ListParams::from_query(Some("count=5&start=2&other=x"));
        assert_eq!(p, params(Some("5"), Some("2")));

        let p = ListParams::from_query(Some("count=3&count=9"));
        assert_eq!(p.count.as_deref(), Some("3"));

        assert_eq!(ListParams::from_query(None), ListParams::default());
        assert_eq!(ListParams::from_query(Some("")), ListParams::default());
    }

    #[test]
    fn parses_numeric_params() {
        let p = Pagination::from(params(Some("3"), Some("20")));
        assert_eq!(p, Pagination { start: 20, count: 3 });

        let p = Pagination::from(params(Some("+4"), Some("-7")));
        assert_eq!(p, Pagination { start: 0, count: 4 });
    }
}
