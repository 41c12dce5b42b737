//! An in-memory recipe catalog.
//!
//! [`RecipeCatalog`] holds an ordered list of [`Recipe`]s and answers lookups
//! and filters over it. Front ends keep a [`CatalogView`] for their filter and
//! selection state, and exchange recipes as JSON.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod uniffi_bindings;
pub mod view;

pub use catalog::RecipeCatalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use model::Recipe;
pub use seed::default_recipes;
pub use view::{CatalogView, RecipeFilter};

// Re-export UniFFI types when feature is enabled
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;
