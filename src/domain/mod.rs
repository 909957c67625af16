//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Links, the persisted registry state and stats projections
//! - [`repositories`] - The [`repositories::LinkStore`] contract
//! - [`code_image`] - The [`code_image::CodeImageEncoder`] contract
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Mutations of [`entities::LinkState`] are plain methods; the store decides
//!   when and under which lock they run
//! - Business logic is orchestrated in services (see [`crate::application::services`])
//!
//! # Click Accounting Flow
//!
//! 1. HTTP handler receives `GET /r/{qr_id}`
//! 2. [`crate::application::services::ResolutionService`] opens a store transaction
//! 3. [`entities::LinkState::record_click`] increments the counter
//! 4. The store persists the new state atomically and the handler redirects

pub mod code_image;
pub mod entities;
pub mod repositories;
