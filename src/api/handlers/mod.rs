//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod home;
pub mod qr;
pub mod redirect;
pub mod register;
pub mod stats;

pub use health::health_handler;
pub use home::home_handler;
pub use qr::qr_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use stats::stats_handler;
