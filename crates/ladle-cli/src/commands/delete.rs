//! Delete operation: remove a recipe after explicit confirmation

use std::io::BufRead;

use ladle_core::RecipeId;
use ladle_storage::RecipeStore;

use crate::output::{print_pick_list, LINE};
use crate::prompt::read_required_line;

pub async fn run<R: BufRead>(input: &mut R, store: &dyn RecipeStore) -> anyhow::Result<()> {
    let recipes = store.list_recipes().await?;
    if recipes.is_empty() {
        println!("{LINE}");
        println!("There are currently no recipes in the database.");
        return Ok(());
    }

    println!("All available recipes:");
    print_pick_list(&recipes);

    let raw = read_required_line(input, "Please enter the number of the recipe you wish to delete: ")?;
    println!("{LINE}");
    let id = match raw.parse::<i64>() {
        Ok(n) => RecipeId(n),
        Err(_) => {
            println!("Invalid entry, please try again.");
            return Ok(());
        }
    };
    let recipe = match store.get_recipe(id).await? {
        Some(recipe) => recipe,
        None => {
            println!("That number is not assigned to a recipe, please try again.");
            return Ok(());
        }
    };

    println!(
        "Are you sure you wish to delete \"{}\"? This action cannot be undone.",
        recipe.name
    );
    let verification = read_required_line(input, "Continue? (y/n) ")?.to_lowercase();
    println!("{LINE}");

    match verification.as_str() {
        "y" => {
            store.delete_recipe(id).await?;
            println!("Recipe deleted.");
        }
        "n" => println!("Deletion cancelled."),
        _ => println!("Invalid entry, please type either y or n."),
    }
    Ok(())
}
