//! Plain value types and JSON helpers.
//!
//! Values are rebuilt from JSON by reading their named fields through
//! `serde`, never by forwarding values positionally to a constructor.

#![forbid(unsafe_code)]

mod json;
mod shapes;

pub use json::{JsonObject, from_json, to_json};
pub use shapes::{Circle, Rectangle};
