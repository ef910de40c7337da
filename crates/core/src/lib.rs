//! Parcelview domain logic.
//!
//! Spherical geometry for drawn paths, shape collections with selection
//! state, visualization edit instructions, saved-render history, and
//! measurement report content. Everything here is pure and synchronous;
//! I/O lives in the other workspace crates.

pub mod error;
pub mod geo;
pub mod history;
pub mod report;
pub mod shape;
pub mod types;
pub mod visualization;
