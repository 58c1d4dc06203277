//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod band_matcher;
pub mod catalog;

pub use band_matcher::{assemble_bands, slot_candidates, Band, BandSlot, CartesianProduct};
pub use catalog::{
    cheapest_in_category, distinct_categories, priciest_in_category, products_by_category,
    top_by_price, DEFAULT_TOP_N,
};
