//! Query policy configuration

use chrono::Duration;

/// Lookback applied when a query gives no explicit date range
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Policy values passed into the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    pub default_window: Duration,
}

impl QueryConfig {
    /// Returns `None` when `days` does not fit in a [`Duration`]
    pub fn with_default_window_days(days: i64) -> Option<Self> {
        Duration::try_days(days).map(|default_window| Self { default_window })
    }

    pub fn default_window_days(&self) -> i64 {
        self.default_window.num_days()
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_window: Duration::days(DEFAULT_WINDOW_DAYS),
        }
    }
}
