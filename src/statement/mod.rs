//! Statement ingestion and end-to-end auditing

pub mod audit;
pub mod reader;

pub use audit::*;
pub use reader::*;
