//! Input validation limits for persisted recipe fields

use thiserror::Error;

/// Maximum length for a recipe name (50 chars)
pub const MAX_RECIPE_NAME_LEN: usize = 50;

/// Maximum length for the flattened ingredient string (255 chars)
pub const MAX_INGREDIENTS_LEN: usize = 255;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Recipe name too long: {len} chars (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Recipe name can only contain letters and spaces")]
    NameNotAlphabetic,

    #[error("Ingredient list too long: {len} chars (max {max})")]
    IngredientsTooLong { len: usize, max: usize },

    #[error("Expected a number, got {0:?}")]
    NotANumber(String),

    #[error("Unknown difficulty label: {0:?}")]
    UnknownDifficulty(String),
}

/// Normalize a recipe name to leading-capital form.
///
/// The first character is uppercased and the rest lowercased, so "pasta
/// BAKE" and "Pasta bake" persist identically.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Validate a recipe name: non-empty, at most [`MAX_RECIPE_NAME_LEN`]
/// chars, letters and spaces only.
pub fn validate_recipe_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_RECIPE_NAME_LEN {
        return Err(ValidationError::NameTooLong {
            len,
            max: MAX_RECIPE_NAME_LEN,
        });
    }
    if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(ValidationError::NameNotAlphabetic);
    }
    Ok(())
}

/// Validate the flattened ingredient string length against the storage
/// column limit. An empty string (zero ingredients) is valid.
pub fn validate_ingredients(joined: &str) -> Result<(), ValidationError> {
    let len = joined.chars().count();
    if len > MAX_INGREDIENTS_LEN {
        return Err(ValidationError::IngredientsTooLong {
            len,
            max: MAX_INGREDIENTS_LEN,
        });
    }
    Ok(())
}

/// Parse a terminal input expected to be a non-negative whole number
/// (a cooking time in minutes, or an ingredient count).
pub fn parse_numeric_input(input: &str) -> Result<u32, ValidationError> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotANumber(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| ValidationError::NotANumber(input.to_string()))
}
