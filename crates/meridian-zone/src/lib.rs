//! Meridian Zone - Fixed UTC offsets as zone identifiers
//!
//! This crate implements the fixed-offset zone:
//! - Offset validation (range and sign rules)
//! - Canonical ids (`Z`, `+02:30`, `-01:01:01`)
//! - `ZoneOffset` value type and its constant `ZoneRules`
//! - `ZoneId` capability trait
//! - Offset factory with a cache of 15-minute aligned instances

pub mod cache;
pub mod id;
pub mod offset;
pub mod rules;
pub mod validate;
pub mod zone;

pub use cache::*;
pub use id::*;
pub use offset::*;
pub use rules::*;
pub use validate::*;
pub use zone::*;
