//! Data model shared by the renderers and the digest cycle.
//!
//! Paper records arrive already fetched and scored; the renderers only read
//! them. A rendered digest is a plain string paired with its file name.

mod document;
mod paper;

pub use document::*;
pub use paper::*;
