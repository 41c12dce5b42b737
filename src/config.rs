use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{RecipeCatalog, RecipeFilter};

/// Catalog configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Seed new catalogs with the default recipes
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
    /// Indent JSON exports
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
    /// Filter a front end starts with
    #[serde(default)]
    pub view: ViewConfig,
}

/// Initial view filter
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub max_time: Option<u32>,
    pub ingredient: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
            pretty_json: default_pretty_json(),
            view: ViewConfig::default(),
        }
    }
}

fn default_seed_defaults() -> bool {
    true
}

fn default_pretty_json() -> bool {
    true
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__VIEW__MAX_TIME
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPES__VIEW__CATEGORY
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// A new catalog, seeded unless `seed_defaults` is off
    pub fn build_catalog(&self) -> RecipeCatalog {
        if self.seed_defaults {
            RecipeCatalog::new()
        } else {
            RecipeCatalog::empty()
        }
    }

    pub fn initial_filter(&self) -> RecipeFilter {
        let view = &self.view;
        let mut filter = RecipeFilter::new();
        if let Some(category) = &view.category {
            filter = filter.category(category.as_str());
        }
        if let Some(difficulty) = &view.difficulty {
            filter = filter.difficulty(difficulty.as_str());
        }
        if let Some(max_time) = view.max_time {
            filter = filter.max_time(max_time);
        }
        if let Some(ingredient) = &view.ingredient {
            filter = filter.ingredient(ingredient.as_str());
        }
        if view.favorites_only {
            filter = filter.favorites();
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CatalogConfig::default();
        assert!(config.seed_defaults);
        assert!(config.pretty_json);
        assert_eq!(config.view, ViewConfig::default());
        assert!(config.initial_filter().is_empty());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_overrides_from_toml() {
        let config = CatalogConfig::from_toml_str(
            r#"
            seed_defaults = false
            pretty_json = false

            [view]
            category = "Dessert"
            max_time = 30
            "#,
        )
        .unwrap();

        assert!(!config.seed_defaults);
        assert!(!config.pretty_json);
        assert!(config.build_catalog().is_empty());
        assert_eq!(
            config.initial_filter(),
            RecipeFilter::new().category("Dessert").max_time(30)
        );
    }

    #[test]
    fn test_seeded_catalog_from_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.build_catalog().len(), 10);
    }

    #[test]
    fn test_initial_filter_applies_to_seeded_catalog() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [view]
            ingredient = "Cheese"
            difficulty = "easy"
            "#,
        )
        .unwrap();

        let catalog = config.build_catalog();
        let names: Vec<&str> = config
            .initial_filter()
            .apply(&catalog)
            .into_iter()
            .map(|recipe| recipe.name())
            .collect();
        assert_eq!(names, vec!["Omelette", "Grilled Cheese Sandwich", "Tacos"]);
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let result = CatalogConfig::from_toml_str("seed_defaults = \"sometimes\"");
        assert!(result.is_err());
    }
}
