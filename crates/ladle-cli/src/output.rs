//! Output formatting utilities

use ladle_core::Recipe;

/// Separator line demarcating terminal sections (35 dashes).
pub const LINE: &str = "-----------------------------------";

/// Format a recipe as its full separator-framed block.
pub fn format_recipe(recipe: &Recipe) -> String {
    format!(
        "{LINE}\n\
         Recipe ID: {}\n\
         Name: {}\n\
         Ingredients: {}\n\
         Cooking time: {} minutes\n\
         Difficulty: {}\n\
         {LINE}",
        recipe.id,
        recipe.name,
        recipe.ingredients_joined(),
        recipe.cooking_time,
        recipe.difficulty(),
    )
}

/// Print the short `id. name` pick list used by edit and delete.
pub fn print_pick_list(recipes: &[Recipe]) {
    println!("{LINE}");
    for recipe in recipes {
        println!("{}. {}", recipe.id, recipe.name);
    }
    println!("{LINE}");
}
