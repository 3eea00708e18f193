//! # Transgate Config
//!
//! Type-safe i18n settings with lock-free runtime updates for Transgate.
//!
//! This crate provides settings loading, validation, and caching. The
//! translation facade reads the `use_i18n` flag and the backend identifiers
//! through a [`SettingsCache`], so the host application may finish
//! configuring itself after the facade has been imported.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
