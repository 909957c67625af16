//! The complete registry state: links plus their click counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::{Link, LinkStats, NewLink};

/// Everything the link store persists, as a single value.
///
/// Serialized as `{"links": {...}, "counters": {...}}`. Ordered maps keep the
/// file byte-stable between writes of the same content. Both maps default to
/// empty so partially written legacy files (e.g. `{"links": {}}`) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkState {
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
    #[serde(default)]
    pub counters: BTreeMap<String, u64>,
}

/// Whether a registration created a new link or replaced existing metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    Updated,
}

impl LinkState {
    pub fn link(&self, qr_id: &str) -> Option<&Link> {
        self.links.get(qr_id)
    }

    /// Current click count; a link without a counter entry reads as 0.
    pub fn clicks(&self, qr_id: &str) -> u64 {
        self.counters.get(qr_id).copied().unwrap_or(0)
    }

    pub fn stats(&self, qr_id: &str) -> Option<LinkStats> {
        self.links.get(qr_id).map(|link| LinkStats {
            qr_id: qr_id.to_string(),
            title: link.title.clone(),
            short_url: link.short_url.clone(),
            clicks: self.clicks(qr_id),
        })
    }

    /// Stats for every link, ordered by `qr_id`.
    pub fn all_stats(&self) -> Vec<LinkStats> {
        self.links
            .keys()
            .filter_map(|qr_id| self.stats(qr_id))
            .collect()
    }

    pub fn total_clicks(&self) -> u64 {
        self.counters
            .values()
            .fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    /// Inserts or replaces link metadata.
    ///
    /// The counter is created at 0 for a new `qr_id` and left untouched for an
    /// existing one.
    pub fn upsert(&mut self, new_link: NewLink) -> Registration {
        let (qr_id, link) = new_link.into_parts();

        self.counters.entry(qr_id.clone()).or_insert(0);

        match self.links.insert(qr_id, link) {
            Some(_) => Registration::Updated,
            None => Registration::Created,
        }
    }

    /// Increments the counter of a registered link and returns the new value.
    ///
    /// Returns `None` (and changes nothing) when `qr_id` is not registered.
    pub fn record_click(&mut self, qr_id: &str) -> Option<u64> {
        if !self.links.contains_key(qr_id) {
            return None;
        }

        let counter = self.counters.entry(qr_id.to_string()).or_insert(0);
        *counter = counter.saturating_add(1);
        Some(*counter)
    }

    /// Counter keys with no matching link.
    pub fn orphan_counters(&self) -> Vec<&str> {
        self.counters
            .keys()
            .filter(|qr_id| !self.links.contains_key(*qr_id))
            .map(String::as_str)
            .collect()
    }
}
