//! List operation: print every recipe in store order

use ladle_storage::RecipeStore;

use crate::output::{format_recipe, LINE};

pub async fn run(store: &dyn RecipeStore) -> anyhow::Result<()> {
    let recipes = store.list_recipes().await?;
    if recipes.is_empty() {
        println!("There are currently no recipes in the database.");
        return Ok(());
    }

    println!("{LINE}");
    println!("All available recipes:");
    for recipe in &recipes {
        println!("{}", format_recipe(recipe));
    }
    Ok(())
}
