//! Monetary amount codec: exact-decimal parsing and accounting-style rendering

pub mod codec;
pub mod format;

pub use codec::*;
pub use format::*;
