//! UniFFI bindings for recipe-catalog
//!
//! This module provides FFI-compatible types for use with iOS and Android.
//! Native code gets a shared catalog handle; the handle serializes access
//! with a mutex because the host may call it from any thread.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{CatalogError, Recipe, RecipeCatalog};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
    /// Preparation time in minutes
    pub time_required: u32,
    pub category: String,
    pub difficulty: String,
    pub is_favorite: bool,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            name: recipe.name().to_string(),
            ingredients: recipe.ingredients().to_vec(),
            steps: recipe.steps().to_string(),
            time_required: recipe.time_required(),
            category: recipe.category().to_string(),
            difficulty: recipe.difficulty().to_string(),
            is_favorite: recipe.is_favorite(),
        }
    }
}

impl From<&Recipe> for FfiRecipe {
    fn from(recipe: &Recipe) -> Self {
        recipe.clone().into()
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        let mut recipe = Recipe::new(
            ffi.name,
            ffi.ingredients,
            ffi.steps,
            ffi.time_required,
            ffi.category,
            ffi.difficulty,
        );
        recipe.set_favorite(ffi.is_favorite);
        recipe
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiCatalogError {
    /// Recipe is not in the catalog
    NotFound { message: String },
    /// Index or selection was not valid
    InvalidInput { message: String },
    /// JSON encoding or decoding failed
    SerializationError { message: String },
    /// Configuration error
    ConfigError { message: String },
}

impl fmt::Display for FfiCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiCatalogError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiCatalogError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiCatalogError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            FfiCatalogError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiCatalogError {}

impl From<CatalogError> for FfiCatalogError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(name) => FfiCatalogError::NotFound { message: name },
            err @ (CatalogError::IndexOutOfRange { .. } | CatalogError::NothingSelected) => {
                FfiCatalogError::InvalidInput {
                    message: err.to_string(),
                }
            }
            CatalogError::Serialization(e) => FfiCatalogError::SerializationError {
                message: e.to_string(),
            },
            CatalogError::ConfigError(e) => FfiCatalogError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Shared catalog handle for native front ends
#[derive(Debug, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiRecipeCatalog {
    inner: Mutex<RecipeCatalog>,
}

impl FfiRecipeCatalog {
    fn catalog(&self) -> MutexGuard<'_, RecipeCatalog> {
        // The catalog has no invariants a panicking caller could break halfway
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn collect(recipes: Vec<&Recipe>) -> Vec<FfiRecipe> {
        recipes.into_iter().map(FfiRecipe::from).collect()
    }
}

/// Catalog seeded with the default recipes
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn new_recipe_catalog() -> Arc<FfiRecipeCatalog> {
    Arc::new(FfiRecipeCatalog {
        inner: Mutex::new(RecipeCatalog::new()),
    })
}

/// Catalog without any recipes
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn empty_recipe_catalog() -> Arc<FfiRecipeCatalog> {
    Arc::new(FfiRecipeCatalog::default())
}

/// Catalog decoded from the JSON exchange format
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recipe_catalog_from_json(json: String) -> Result<Arc<FfiRecipeCatalog>, FfiCatalogError> {
    let catalog = RecipeCatalog::from_json(&json)?;
    Ok(Arc::new(FfiRecipeCatalog {
        inner: Mutex::new(catalog),
    }))
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiRecipeCatalog {
    pub fn len(&self) -> u32 {
        self.catalog().len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.catalog().is_empty()
    }

    pub fn recipes(&self) -> Vec<FfiRecipe> {
        self.catalog().iter().map(FfiRecipe::from).collect()
    }

    pub fn add(&self, recipe: FfiRecipe) {
        self.catalog().add(recipe.into());
    }

    pub fn remove(&self, recipe: FfiRecipe) -> Result<FfiRecipe, FfiCatalogError> {
        let recipe: Recipe = recipe.into();
        Ok(self.catalog().remove(&recipe)?.into())
    }

    pub fn remove_at(&self, index: u32) -> Result<FfiRecipe, FfiCatalogError> {
        Ok(self.catalog().remove_at(index as usize)?.into())
    }

    pub fn find_by_name(&self, name: String) -> Option<FfiRecipe> {
        self.catalog().find_by_name(&name).map(FfiRecipe::from)
    }

    pub fn toggle_favorite(&self, name: String) -> Result<bool, FfiCatalogError> {
        Ok(self.catalog().toggle_favorite(&name)?)
    }

    pub fn filter_by_category(&self, category: String) -> Vec<FfiRecipe> {
        Self::collect(self.catalog().filter_by_category(&category))
    }

    pub fn filter_by_difficulty(&self, difficulty: String) -> Vec<FfiRecipe> {
        Self::collect(self.catalog().filter_by_difficulty(&difficulty))
    }

    pub fn filter_by_max_time(&self, minutes: u32) -> Vec<FfiRecipe> {
        Self::collect(self.catalog().filter_by_max_time(minutes))
    }

    pub fn filter_by_ingredient(&self, ingredient: String) -> Vec<FfiRecipe> {
        Self::collect(self.catalog().filter_by_ingredient(&ingredient))
    }

    pub fn favorites(&self) -> Vec<FfiRecipe> {
        Self::collect(self.catalog().favorites())
    }

    pub fn all_categories(&self) -> Vec<String> {
        self.catalog()
            .all_categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, FfiCatalogError> {
        Ok(self.catalog().to_json_string(pretty)?)
    }
}

/// Multi-line text summary of a recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn describe_recipe(recipe: FfiRecipe) -> String {
    Recipe::from(recipe).describe()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
