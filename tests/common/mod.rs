//! Common test utilities for roster CLI tests.
//!
//! - `TestEnv`: isolated working directory and config home
//! - Fixtures: catalog and registry documents

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
