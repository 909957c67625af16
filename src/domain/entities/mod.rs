//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - Metadata registered for a `qr_id`
//! - [`LinkState`] - All links plus their click counters, persisted as one unit
//! - [`LinkStats`] - Read-only projection of a link and its click count
//!
//! `NewLink` is the typed registration input; [`Registration`] reports whether
//! it created or replaced a link.

pub mod link;
pub mod link_state;

pub use link::{Link, LinkStats, NewLink};
pub use link_state::{LinkState, Registration};
