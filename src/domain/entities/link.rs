//! Link entity representing a registered QR code target.

use serde::{Deserialize, Serialize};

/// Metadata registered for a `qr_id`.
///
/// This is exactly the shape persisted under `links.<qr_id>` in the state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub long_url: String,
    pub short_url: String,
}

impl Link {
    pub fn new(title: String, long_url: String, short_url: String) -> Self {
        Self {
            title,
            long_url,
            short_url,
        }
    }
}

/// Input data for registering (or re-registering) a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub qr_id: String,
    pub title: String,
    pub long_url: String,
    pub short_url: String,
}

impl NewLink {
    pub fn new(qr_id: String, title: String, long_url: String, short_url: String) -> Self {
        Self {
            qr_id,
            title,
            long_url,
            short_url,
        }
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(self) -> Self {
        Self {
            qr_id: self.qr_id.trim().to_string(),
            title: self.title.trim().to_string(),
            long_url: self.long_url.trim().to_string(),
            short_url: self.short_url.trim().to_string(),
        }
    }

    /// Splits the input into the storage key and the stored metadata.
    pub fn into_parts(self) -> (String, Link) {
        (
            self.qr_id,
            Link::new(self.title, self.long_url, self.short_url),
        )
    }
}

/// Read-only projection of a link together with its click counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub qr_id: String,
    pub title: String,
    pub short_url: String,
    pub clicks: u64,
}
