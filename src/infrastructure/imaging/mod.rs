//! Code image rendering.

mod qr_png;

pub use qr_png::QrPngEncoder;
