//! Edit operation: change one field of an existing recipe

use std::io::BufRead;

use ladle_core::{
    join_ingredients, normalize_name, parse_numeric_input, validate_ingredients,
    validate_recipe_name, RecipeId,
};
use ladle_storage::RecipeStore;

use crate::output::{print_pick_list, LINE};
use crate::prompt::read_required_line;

/// One field per invocation; the new value passes the same rules as
/// create, and difficulty follows the mutation automatically because it
/// is computed from the persisted fields.
pub async fn run<R: BufRead>(input: &mut R, store: &dyn RecipeStore) -> anyhow::Result<()> {
    let recipes = store.list_recipes().await?;
    if recipes.is_empty() {
        println!("There are currently no recipes in the database.");
        return Ok(());
    }

    println!("\nAvailable recipes:");
    print_pick_list(&recipes);

    let raw = read_required_line(input, "Enter the number of the recipe you wish to edit: ")?;
    let id = match raw.parse::<i64>() {
        Ok(n) => RecipeId(n),
        Err(_) => {
            println!("\nInvalid entry, please try again.");
            return Ok(());
        }
    };
    let mut recipe = match store.get_recipe(id).await? {
        Some(recipe) => recipe,
        None => {
            println!("\nInvalid entry, please try again.");
            return Ok(());
        }
    };

    println!("{LINE}");
    println!("1. Name: {}", recipe.name);
    println!("2. Ingredients: {}", recipe.ingredients_joined());
    println!("3. Cooking time in minutes: {}", recipe.cooking_time);
    println!("{LINE}");

    let choice = read_required_line(
        input,
        "Enter the number of the value you wish to edit (one at a time): ",
    )?;
    match choice.as_str() {
        "1" => {
            println!("{LINE}");
            let new_value = read_required_line(input, "Enter the new name for this recipe: ")?;
            println!("{LINE}");
            let new_name = normalize_name(&new_value);
            if let Err(e) = validate_recipe_name(&new_name) {
                println!("{e}");
                return Ok(());
            }
            recipe.name = new_name;
        }
        "2" => {
            println!("{LINE}");
            let new_value =
                read_required_line(input, "Enter all ingredients, separated by commas: ")?;
            println!("{LINE}");
            let ingredients: Vec<String> = new_value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if let Err(e) = validate_ingredients(&join_ingredients(&ingredients)) {
                println!("{e}");
                return Ok(());
            }
            recipe.ingredients = ingredients;
        }
        "3" => {
            println!("{LINE}");
            let new_value = read_required_line(input, "Enter a new cooking time in minutes: ")?;
            println!("{LINE}");
            match parse_numeric_input(&new_value) {
                Ok(time) => recipe.cooking_time = time,
                Err(_) => {
                    println!("Only numbers are allowed.");
                    return Ok(());
                }
            }
        }
        _ => {
            println!("Invalid choice, please enter 1, 2 or 3.");
            return Ok(());
        }
    }

    store.update_recipe(&recipe).await?;
    println!("Recipe has been updated!");
    Ok(())
}
