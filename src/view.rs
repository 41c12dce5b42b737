//! Presentation state for catalog front ends.
//!
//! A front end keeps one [`CatalogView`] around between interactions. The view
//! owns the catalog together with the active [`RecipeFilter`] and the current
//! selection, and every read goes back through the catalog's queries so the
//! result always reflects the latest mutations.

use std::fmt::Write as _;

use log::debug;

use crate::model::{eq_ignore_case, Recipe};
use crate::{CatalogError, RecipeCatalog};

/// Combination of filter criteria; a recipe must satisfy every active one.
///
/// # Example
/// ```
/// use recipe_catalog::{RecipeCatalog, RecipeFilter};
///
/// let catalog = RecipeCatalog::new();
/// let quick_breakfasts = RecipeFilter::new()
///     .category("breakfast")
///     .max_time(10)
///     .apply(&catalog);
///
/// assert_eq!(quick_breakfasts.len(), 1);
/// assert_eq!(quick_breakfasts[0].name(), "Omelette");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    category: Option<String>,
    difficulty: Option<String>,
    max_time: Option<u32>,
    ingredient: Option<String>,
    favorites_only: bool,
}

impl RecipeFilter {
    /// A filter that lets every recipe through
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep recipes in `category` (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only keep recipes with this difficulty (case-insensitive)
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Only keep recipes that take at most `minutes`
    pub fn max_time(mut self, minutes: u32) -> Self {
        self.max_time = Some(minutes);
        self
    }

    /// Only keep recipes that list `ingredient` (case-insensitive)
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Only keep recipes marked as favorites
    pub fn favorites(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(category) = &self.category {
            if !eq_ignore_case(recipe.category(), category) {
                return false;
            }
        }
        if let Some(difficulty) = &self.difficulty {
            if !eq_ignore_case(recipe.difficulty(), difficulty) {
                return false;
            }
        }
        if let Some(max_time) = self.max_time {
            if recipe.time_required() > max_time {
                return false;
            }
        }
        if let Some(ingredient) = &self.ingredient {
            if !recipe.has_ingredient(ingredient) {
                return false;
            }
        }
        !self.favorites_only || recipe.is_favorite()
    }

    /// Matching recipes from `catalog`, in catalog order
    pub fn apply<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a Recipe> {
        catalog.filter(|recipe| self.matches(recipe))
    }
}

/// A catalog plus the filter and selection a front end is showing
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    catalog: RecipeCatalog,
    filter: RecipeFilter,
    selected: Option<String>,
}

impl CatalogView {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self::with_filter(catalog, RecipeFilter::default())
    }

    pub fn with_filter(catalog: RecipeCatalog, filter: RecipeFilter) -> Self {
        Self {
            catalog,
            filter,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut RecipeCatalog {
        &mut self.catalog
    }

    pub fn into_catalog(self) -> RecipeCatalog {
        self.catalog
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: RecipeFilter) {
        debug!("View filter changed to {:?}", filter);
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(RecipeFilter::default());
    }

    /// Recipes passing the current filter
    pub fn visible(&self) -> Vec<&Recipe> {
        self.filter.apply(&self.catalog)
    }

    pub fn add(&mut self, recipe: Recipe) {
        self.catalog.add(recipe);
    }

    /// Select the recipe called `name`. An unknown name clears the selection.
    pub fn select(&mut self, name: &str) -> Option<&Recipe> {
        self.selected = self
            .catalog
            .find_by_name(name)
            .map(|recipe| recipe.name().to_string());
        self.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected
            .as_deref()
            .and_then(|name| self.catalog.find_by_name(name))
    }

    /// Flip the favorite flag of the selected recipe and return the new value
    pub fn toggle_selected_favorite(&mut self) -> Result<bool, CatalogError> {
        let name = self.selected.as_deref().ok_or(CatalogError::NothingSelected)?;
        self.catalog.toggle_favorite(name)
    }

    /// Remove the selected recipe from the catalog and clear the selection
    pub fn remove_selected(&mut self) -> Result<Recipe, CatalogError> {
        let name = self.selected.take().ok_or(CatalogError::NothingSelected)?;
        let recipe = self
            .catalog
            .find_by_name(&name)
            .cloned()
            .ok_or(CatalogError::NotFound(name))?;
        self.catalog.remove(&recipe)
    }

    /// One line per visible recipe, favorites marked with `*`
    pub fn render_list(&self) -> String {
        let mut out = String::new();
        for recipe in self.visible() {
            let marker = if recipe.is_favorite() { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "{} {} ({}, {}, {} min)",
                marker,
                recipe.name(),
                recipe.category(),
                recipe.difficulty(),
                recipe.time_required()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
        recipes.iter().map(|recipe| recipe.name()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let catalog = RecipeCatalog::new();
        let filter = RecipeFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_filter_combines_criteria() {
        let catalog = RecipeCatalog::new();
        let filter = RecipeFilter::new()
            .category("MAIN COURSE")
            .difficulty("easy")
            .ingredient("cheese");

        assert!(!filter.is_empty());
        assert_eq!(names(&filter.apply(&catalog)), vec!["Tacos"]);
    }

    #[test]
    fn test_favorites_filter() {
        let mut catalog = RecipeCatalog::new();
        catalog.toggle_favorite("Beef Stew").unwrap();

        let filter = RecipeFilter::new().favorites();
        assert_eq!(names(&filter.apply(&catalog)), vec!["Beef Stew"]);
        assert!(filter.clone().max_time(60).apply(&catalog).is_empty());
    }

    #[test]
    fn test_render_list_marks_favorites() {
        let mut view = CatalogView::new(RecipeCatalog::new());
        view.set_filter(RecipeFilter::new().category("Dessert"));
        view.select("fruit salad");
        view.toggle_selected_favorite().unwrap();

        let rendered = view.render_list();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  Chocolate Cake (Dessert, Hard, 60 min)");
        assert_eq!(lines[1], "* Fruit Salad (Dessert, Easy, 5 min)");
    }

    #[test]
    fn test_select_unknown_clears_selection() {
        let mut view = CatalogView::new(RecipeCatalog::new());
        assert!(view.select("Omelette").is_some());
        assert!(view.select("Lasagne").is_none());
        assert!(view.selected().is_none());
    }
}
