//! Sort direction for price rankings

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most expensive first
    #[default]
    #[value(alias = "desc")]
    Descending,
    /// Cheapest first
    #[value(alias = "asc")]
    Ascending,
}
