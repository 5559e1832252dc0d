//! Dateconv Date Normalization Engine.
//!
//! Turns heterogeneous date/time text (absolute dates in many written
//! forms, relative phrases such as "5分钟前") into one of two canonical
//! strings: `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
//!
//! Pure computation, no I/O, no shared state; every call is independent
//! and samples the clock at most once.

pub mod error;
pub mod layouts;
pub mod normalize;
pub mod relative;
pub mod special;

pub use error::NormalizeError;
pub use normalize::{normalize, normalize_at};
