use crate::model::Recipe;

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The ten recipes every new catalog starts with
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Bolognese",
            list(&["Spaghetti", "Ground Beef", "Tomato Sauce", "Onion", "Garlic"]),
            "Cook the spaghetti. Brown the beef with onion and garlic, add the tomato sauce and simmer. Serve the sauce over the pasta.",
            30,
            "Main Course",
            "Medium",
        ),
        Recipe::new(
            "Chicken Curry",
            list(&["Chicken", "Curry Powder", "Coconut Milk", "Onion", "Garlic", "Rice"]),
            "Fry the onion and garlic, add the chicken and curry powder. Pour in the coconut milk and simmer until cooked. Serve with rice.",
            45,
            "Main Course",
            "Medium",
        ),
        Recipe::new(
            "Caesar Salad",
            list(&["Romaine Lettuce", "Croutons", "Parmesan", "Caesar Dressing"]),
            "Chop the lettuce, toss with the dressing and top with croutons and parmesan.",
            15,
            "Salad",
            "Easy",
        ),
        Recipe::new(
            "Chocolate Cake",
            list(&["Flour", "Sugar", "Cocoa Powder", "Eggs", "Butter", "Baking Powder"]),
            "Mix the dry ingredients, beat in the eggs and melted butter. Pour into a tin and bake for 40 minutes.",
            60,
            "Dessert",
            "Hard",
        ),
        Recipe::new(
            "Pancakes",
            list(&["Flour", "Milk", "Eggs", "Sugar", "Baking Powder"]),
            "Whisk everything into a smooth batter and cook ladlefuls on a hot griddle until golden on both sides.",
            15,
            "Breakfast",
            "Easy",
        ),
        Recipe::new(
            "Omelette",
            list(&["Eggs", "Milk", "Cheese", "Salt", "Pepper"]),
            "Beat the eggs with milk and seasoning, pour into a hot pan, add the cheese and fold.",
            10,
            "Breakfast",
            "Easy",
        ),
        Recipe::new(
            "Grilled Cheese Sandwich",
            list(&["Bread", "Cheese", "Butter"]),
            "Butter the bread, put the cheese between the slices and grill until the cheese melts.",
            5,
            "Snack",
            "Easy",
        ),
        Recipe::new(
            "Beef Stew",
            list(&["Beef", "Potatoes", "Carrots", "Onion", "Beef Stock"]),
            "Brown the beef, add the vegetables and stock, then simmer slowly for two hours.",
            120,
            "Main Course",
            "Hard",
        ),
        Recipe::new(
            "Tacos",
            list(&["Taco Shells", "Ground Beef", "Lettuce", "Tomato", "Cheese"]),
            "Cook the beef, fill the taco shells and top with lettuce, tomato and cheese.",
            20,
            "Main Course",
            "Easy",
        ),
        Recipe::new(
            "Fruit Salad",
            list(&["Apple", "Banana", "Orange", "Grapes"]),
            "Chop the fruit and mix it together in a bowl.",
            5,
            "Dessert",
            "Easy",
        ),
    ]
}
