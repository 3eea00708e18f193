//! # Transgate Common
//!
//! Shared types, utilities, and common functionality for Transgate.
//!
//! This crate provides the error type, language-code helpers, and test
//! utilities used across all other crates in the Transgate workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
