//! Contact event domain module.
//!
//! # Module Structure
//!
//! - `model`: `ContactEvent` and the untyped `RawTable` it is parsed from
//! - `normalizer`: `RecordNormalizer`, raw rows to typed events

mod model;
mod normalizer;

pub use model::{ContactEvent, RawTable};
pub use normalizer::{RecordNormalizer, parse_timestamp};
