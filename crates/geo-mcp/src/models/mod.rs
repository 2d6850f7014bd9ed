//! Data models for E-Utilities requests and tool inputs.
//!
//! Search and summary responses stay as raw `serde_json::Value`; only the
//! pieces this crate acts on are modeled here.

mod enums;
mod inputs;

pub use enums::Collection;
pub use inputs::GeoSearchInput;
