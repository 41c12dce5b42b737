use std::collections::BTreeSet;

use log::{debug, warn};
use serde_json::Value;

use crate::model::{eq_ignore_case, Recipe};
use crate::{seed, CatalogError};

/// An ordered, in-memory collection of recipes.
///
/// Insertion order is kept for every query. Names are not required to be
/// unique; name lookups return the first case-insensitive match.
/// `Default` gives an empty catalog, [`RecipeCatalog::new`] a seeded one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Create a catalog seeded with the default recipes
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeCatalog;
    ///
    /// let catalog = RecipeCatalog::new();
    /// assert_eq!(catalog.len(), 10);
    /// assert!(catalog.find_by_name("pancakes").is_some());
    /// ```
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog.seed_defaults();
        catalog
    }

    /// Create a catalog without any recipes
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Create a catalog holding exactly `recipes`, in order
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Decode a JSON array produced by [`RecipeCatalog::to_json_string`]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        debug!("Decoded {} recipes from JSON", recipes.len());
        Ok(Self::from_recipes(recipes))
    }

    /// Append the default recipes to the catalog
    pub fn seed_defaults(&mut self) {
        let defaults = seed::default_recipes();
        debug!("Seeding catalog with {} default recipes", defaults.len());
        self.recipes.extend(defaults);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn add(&mut self, recipe: Recipe) {
        debug!("Adding recipe '{}'", recipe.name());
        self.recipes.push(recipe);
    }

    /// Index of the first recipe equal to `recipe` in every field
    pub fn position(&self, recipe: &Recipe) -> Option<usize> {
        self.recipes.iter().position(|candidate| candidate == recipe)
    }

    /// Remove the first recipe equal to `recipe` and return it
    ///
    /// Equality covers every field, the favorite flag included. When several
    /// entries are equal the earliest one is removed.
    pub fn remove(&mut self, recipe: &Recipe) -> Result<Recipe, CatalogError> {
        match self.position(recipe) {
            Some(index) => {
                debug!("Removing recipe '{}' at index {}", recipe.name(), index);
                Ok(self.recipes.remove(index))
            }
            None => {
                warn!("Cannot remove '{}': not in catalog", recipe.name());
                Err(CatalogError::NotFound(recipe.name().to_string()))
            }
        }
    }

    /// Remove the recipe at `index` and return it
    pub fn remove_at(&mut self, index: usize) -> Result<Recipe, CatalogError> {
        if index >= self.recipes.len() {
            warn!("Cannot remove index {}: catalog has {} recipes", index, self.len());
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.recipes.len(),
            });
        }
        let removed = self.recipes.remove(index);
        debug!("Removed recipe '{}' at index {}", removed.name(), index);
        Ok(removed)
    }

    /// First recipe whose name equals `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| eq_ignore_case(recipe.name(), name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|recipe| eq_ignore_case(recipe.name(), name))
    }

    /// Flip the favorite flag of the recipe called `name` and return the new value
    pub fn toggle_favorite(&mut self, name: &str) -> Result<bool, CatalogError> {
        let recipe = self
            .find_by_name_mut(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        let favorite = recipe.toggle_favorite();
        debug!("Recipe '{}' favorite = {}", recipe.name(), favorite);
        Ok(favorite)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Recipe> {
        self.filter(|recipe| eq_ignore_case(recipe.category(), category))
    }

    pub fn filter_by_difficulty(&self, difficulty: &str) -> Vec<&Recipe> {
        self.filter(|recipe| eq_ignore_case(recipe.difficulty(), difficulty))
    }

    /// Recipes that take at most `minutes` to prepare
    pub fn filter_by_max_time(&self, minutes: u32) -> Vec<&Recipe> {
        self.filter(|recipe| recipe.time_required() <= minutes)
    }

    pub fn filter_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.filter(|recipe| recipe.has_ingredient(ingredient))
    }

    pub fn favorites(&self) -> Vec<&Recipe> {
        self.filter(Recipe::is_favorite)
    }

    /// Recipes matching `predicate`, in insertion order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Recipe>
    where
        P: FnMut(&Recipe) -> bool,
    {
        self.recipes
            .iter()
            .filter(|&recipe| predicate(recipe))
            .collect()
    }

    /// Distinct categories present in the catalog
    pub fn all_categories(&self) -> BTreeSet<&str> {
        self.recipes.iter().map(Recipe::category).collect()
    }

    /// JSON array of every recipe, in catalog order
    pub fn serialize_all(&self) -> Value {
        Value::Array(self.recipes.iter().map(Recipe::to_json).collect())
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, CatalogError> {
        let value = self.serialize_all();
        let json = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, time: u32) -> Recipe {
        Recipe::new(
            name,
            vec!["Water".to_string()],
            "Boil.",
            time,
            "Test",
            "Easy",
        )
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = RecipeCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.all_categories().is_empty());
        assert_eq!(catalog.serialize_all(), Value::Array(Vec::new()));
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(recipe("Tea", 3));
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.recipes().last().map(Recipe::name), Some("Tea"));
    }

    #[test]
    fn test_remove_returns_removed_recipe() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        let removed = catalog.remove(&recipe("Tea", 3)).unwrap();
        assert_eq!(removed.name(), "Tea");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove_takes_first_of_duplicates() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        catalog.add(recipe("Coffee", 4));
        catalog.add(recipe("Tea", 3));

        catalog.remove(&recipe("Tea", 3)).unwrap();
        let names: Vec<&str> = catalog.iter().map(Recipe::name).collect();
        assert_eq!(names, vec!["Coffee", "Tea"]);
    }

    #[test]
    fn test_remove_compares_favorite_flag() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        catalog.toggle_favorite("tea").unwrap();

        let result = catalog.remove(&recipe("Tea", 3));
        assert!(matches!(result, Err(CatalogError::NotFound(name)) if name == "Tea"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_at() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        catalog.add(recipe("Coffee", 4));

        assert_eq!(catalog.remove_at(1).unwrap().name(), "Coffee");
        assert!(matches!(
            catalog.remove_at(1),
            Err(CatalogError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        catalog.add(recipe("TEA", 7));
        assert_eq!(catalog.find_by_name("tea").map(Recipe::time_required), Some(3));
    }

    #[test]
    fn test_toggle_favorite_unknown_name() {
        let mut catalog = RecipeCatalog::new();
        assert!(matches!(
            catalog.toggle_favorite("Lasagne"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_favorites_follow_toggles() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.favorites().is_empty());

        assert!(catalog.toggle_favorite("tacos").unwrap());
        assert!(catalog.toggle_favorite("Pancakes").unwrap());
        let names: Vec<&str> = catalog.favorites().into_iter().map(Recipe::name).collect();
        assert_eq!(names, vec!["Pancakes", "Tacos"]);

        assert!(!catalog.toggle_favorite("TACOS").unwrap());
        assert_eq!(catalog.favorites().len(), 1);
    }

    #[test]
    fn test_to_json_string_compact() {
        let mut catalog = RecipeCatalog::empty();
        catalog.add(recipe("Tea", 3));
        let json = catalog.to_json_string(false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("[{"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = RecipeCatalog::from_json("{not json");
        assert!(matches!(result, Err(CatalogError::Serialization(_))));
    }
}
