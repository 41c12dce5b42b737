use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single dish in the catalog.
///
/// Everything except the favorite flag is fixed once the recipe is built,
/// so the fields are private and only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    steps: String,
    /// Preparation time in minutes
    time_required: u32,
    category: String,
    difficulty: String,
    #[serde(default)]
    is_favorite: bool,
}

impl Recipe {
    /// Create a new recipe that is not marked as a favorite
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Recipe;
    ///
    /// let recipe = Recipe::new(
    ///     "Toast",
    ///     vec!["Bread".to_string(), "Butter".to_string()],
    ///     "Toast the bread and spread the butter.",
    ///     5,
    ///     "Breakfast",
    ///     "Easy",
    /// );
    /// assert!(!recipe.is_favorite());
    /// ```
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: impl Into<String>,
        time_required: u32,
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            steps: steps.into(),
            time_required,
            category: category.into(),
            difficulty: difficulty.into(),
            is_favorite: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &str {
        &self.steps
    }

    pub fn time_required(&self) -> u32 {
        self.time_required
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }

    /// Flip the favorite flag and return the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Whether one of the ingredients equals `ingredient`, ignoring case
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients
            .iter()
            .any(|candidate| eq_ignore_case(candidate, ingredient))
    }

    /// Encode every field, the favorite flag included, as a JSON object
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "ingredients": self.ingredients,
            "steps": self.steps,
            "time_required": self.time_required,
            "category": self.category,
            "difficulty": self.difficulty,
            "is_favorite": self.is_favorite,
        })
    }

    /// Human readable multi-line summary of the recipe
    pub fn describe(&self) -> String {
        format!(
            "{}\nCategory: {}\nDifficulty: {}\nTime required: {} minutes\nIngredients: {}\nSteps: {}",
            self.name,
            self.category,
            self.difficulty,
            self.time_required,
            self.ingredients.join(", "),
            self.steps
        )
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Case-insensitive string equality used by every catalog lookup
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
