//! The base of knowledge: four independent license property tables.
//!
//! - [`compatibility`] — pairwise license compatibility under a link type
//!   and redistribution mode; absent tuples answer `Unsupported`.
//! - [`obsolescence`] — license age, derived from version-family positions.
//! - [`trend`] — adoption trend.
//! - [`spreading`] — current market spread.
//!
//! Each table is built once per process into an immutable map and queried
//! through a pure, total function; concurrent reads are always safe. The
//! pseudo-licenses are pinned to the worst classification on every ordinal
//! scale.

pub mod compatibility;
pub mod obsolescence;
pub mod spreading;
pub mod trend;
