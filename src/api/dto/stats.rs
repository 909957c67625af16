//! DTOs for per-link statistics.

use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Metadata and click count for one link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub title: String,
    pub short_url: String,
    pub clicks: u64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            title: stats.title,
            short_url: stats.short_url,
            clicks: stats.clicks,
        }
    }
}
