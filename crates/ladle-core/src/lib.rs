//! Ladle Core - Recipe types for the Ladle recipe manager
//!
//! This crate provides the recipe entity, the difficulty classification
//! rule, and the validation limits shared by the storage backends and the
//! interactive CLI.

pub mod limits;
pub mod recipe;

pub use limits::{
    normalize_name, parse_numeric_input, validate_ingredients, validate_recipe_name,
    ValidationError, MAX_INGREDIENTS_LEN, MAX_RECIPE_NAME_LEN,
};
pub use recipe::{join_ingredients, parse_ingredients, Difficulty, NewRecipe, Recipe, RecipeId};
