//! Terminal output for the roster binary
//!
//! Views return `String`s so they can be tested without a terminal; the
//! command layer decides where to print them.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
