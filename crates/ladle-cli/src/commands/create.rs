//! Create operation: prompt for a recipe and persist it

use std::io::BufRead;

use ladle_core::{normalize_name, parse_numeric_input, validate_recipe_name, NewRecipe};
use ladle_storage::RecipeStore;

use crate::output::LINE;
use crate::prompt::read_required_line;

/// Prompt for name, ingredients and cooking time, validate each in order,
/// and persist. Any validation failure aborts the whole operation with
/// nothing written.
pub async fn run<R: BufRead>(input: &mut R, store: &dyn RecipeStore) -> anyhow::Result<()> {
    println!("{LINE}");
    let name = read_required_line(input, "Enter the name of your recipe: ")?;
    let name = normalize_name(&name);
    if let Err(e) = validate_recipe_name(&name) {
        println!("{e}, please try again.");
        return Ok(());
    }

    println!("{LINE}");
    let count_raw = read_required_line(input, "How many ingredients would you like to enter? ")?;
    let count = match parse_numeric_input(&count_raw) {
        Ok(n) => n,
        Err(_) => {
            println!("Only numbers are allowed.");
            return Ok(());
        }
    };

    let mut ingredients = Vec::new();
    for _ in 0..count {
        ingredients.push(read_required_line(input, "Enter new ingredient: ")?);
    }

    println!("{LINE}");
    let time_raw =
        read_required_line(input, "Enter the cooking time for your recipe in minutes: ")?;
    let cooking_time = match parse_numeric_input(&time_raw) {
        Ok(t) => t,
        Err(_) => {
            println!("Cooking time must be a number.");
            return Ok(());
        }
    };

    // Re-checks the name and enforces the ingredient-string limit.
    let new = match NewRecipe::new(&name, ingredients, cooking_time) {
        Ok(new) => new,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let recipe = store.add_recipe(&new).await?;

    println!("{LINE}");
    println!("Recipe has been added to the database! (ID {})", recipe.id);
    Ok(())
}
