/// Sort key crates.io uses for "most downloaded in the last 90 days".
pub const RECENT_DOWNLOADS: &str = "recent-downloads";

/// One page of the crates.io listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort: &'static str,
}

impl PageQuery {
    /// First hundred crates by recent downloads.
    pub const fn recent_downloads() -> Self {
        Self {
            page: 1,
            per_page: 100,
            sort: RECENT_DOWNLOADS,
        }
    }

    /// Query string for the listing endpoint, without the leading `?`.
    pub fn query_string(&self) -> String {
        format!(
            "page={}&per_page={}&sort={}",
            self.page, self.per_page, self.sort
        )
    }
}
