//! skip/limit pagination

use serde::Deserialize;

/// Default page size
pub const DEFAULT_LIMIT: u32 = 100;

/// Server-side cap on page size; larger requests are clamped.
pub const MAX_LIMIT: u32 = 1000;

/// Offset pagination over storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Records to skip
    pub skip: u32,
    /// Records to return (at most [`MAX_LIMIT`])
    pub limit: u32,
}

impl Page {
    /// Create a page, clamping `limit` to [`MAX_LIMIT`].
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let page = Page::from(PageParams::default());
        assert_eq!(page, Page { skip: 0, limit: 100 });
        assert_eq!(page, Page::default());
    }

    #[test]
    fn clamps_limit() {
        assert_eq!(Page::new(0, 5_000).limit, MAX_LIMIT);
        assert_eq!(Page::new(0, 0).limit, 0);
    }

    #[test]
    fn sql_values() {
        let page = Page::new(40, 20);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }
}
