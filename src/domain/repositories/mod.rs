//! Storage trait definitions for the domain layer.
//!
//! The domain only knows the [`LinkStore`] contract; the concrete file-backed
//! implementation lives in `crate::infrastructure::persistence`. A mock is
//! generated via `mockall` for service tests.

pub mod link_store;

pub use link_store::{LinkStore, StateTransition};

#[cfg(test)]
pub use link_store::MockLinkStore;
