//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - clap definitions shared by the binary and its tests
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use roster::presentation::factory;
//!
//! let registry = factory::create_roster_use_case(&config);
//! let bands = registry.assemble_bands("ROCK", &instruments)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::ColorWhen;
pub use factory::{create_catalog_use_case, create_roster_use_case};
