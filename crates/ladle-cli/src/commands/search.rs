//! Search operation: pick ingredients from a numbered list, match
//! recipes containing all of them

use std::io::BufRead;

use ladle_core::Recipe;
use ladle_storage::RecipeStore;

use crate::output::{format_recipe, LINE};
use crate::prompt::read_required_line;

/// Collect the distinct ingredients across all recipes in order of first
/// appearance.
fn distinct_ingredients(recipes: &[Recipe]) -> Vec<String> {
    let mut all = Vec::new();
    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if !all.contains(ingredient) {
                all.push(ingredient.clone());
            }
        }
    }
    all
}

/// Resolve whitespace-separated 1-based selection numbers against the
/// displayed list. Every valid selection is kept (deduplicated); each
/// invalid entry produces a warning but does not abort the search.
fn resolve_selections<'a>(raw: &str, all_ingredients: &'a [String]) -> (Vec<&'a str>, Vec<String>) {
    let mut selected: Vec<&str> = Vec::new();
    let mut warnings = Vec::new();

    for token in raw.split_whitespace() {
        match token.parse::<usize>() {
            Err(_) => warnings.push(format!("Only numbers are allowed, skipping {token:?}.")),
            Ok(n) if n < 1 || n > all_ingredients.len() => {
                warnings.push(format!("Invalid number entered ({n}), skipping."));
            }
            Ok(n) => {
                let ingredient = all_ingredients[n - 1].as_str();
                if !selected.contains(&ingredient) {
                    selected.push(ingredient);
                }
            }
        }
    }

    (selected, warnings)
}

/// Keep the recipes whose ingredient string contains every selected
/// ingredient (conjunctive match).
fn filter_matching<'a>(recipes: &'a [Recipe], selected: &[&str]) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| {
            let joined = r.ingredients_joined();
            selected.iter().all(|i| joined.contains(i))
        })
        .collect()
}

/// Zero surviving selections ends the search rather than matching
/// everything.
pub async fn run<R: BufRead>(input: &mut R, store: &dyn RecipeStore) -> anyhow::Result<()> {
    let recipes = store.list_recipes().await?;
    if recipes.is_empty() {
        println!("There are currently no recipes in the database.");
        return Ok(());
    }

    let all_ingredients = distinct_ingredients(&recipes);

    println!("{LINE}");
    for (i, ingredient) in all_ingredients.iter().enumerate() {
        println!("{}. {}", i + 1, ingredient);
    }
    println!("{LINE}");

    let raw = read_required_line(
        input,
        "Please type the numbers of ingredients you would like to search for, separated by spaces: ",
    )?;
    println!("{LINE}");

    let (selected, warnings) = resolve_selections(&raw, &all_ingredients);
    for warning in &warnings {
        println!("{warning}");
    }

    if selected.is_empty() {
        println!("No valid selections were made.");
        return Ok(());
    }

    let matching = filter_matching(&recipes, &selected);
    if matching.is_empty() {
        println!("No recipes found with these ingredients.");
    } else {
        for recipe in matching {
            println!("{}", format_recipe(recipe));
        }
    }
    Ok(())
}
