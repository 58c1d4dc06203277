//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod price;
mod search;
mod sort_order;
mod text;

pub use price::{Price, ProductId};
pub use search::{FieldOp, ListField, MatchMode, SearchField, SearchFilters, UnknownFieldError};
pub use sort_order::SortOrder;
pub use text::{normalize, split_list, title_case};
