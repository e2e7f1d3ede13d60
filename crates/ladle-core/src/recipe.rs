//! Recipe entity types and the difficulty classification rule

use crate::limits::{validate_ingredients, validate_recipe_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Separator used when flattening the ingredient list into a single string.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Unique identifier for a recipe, assigned by the store on creation.
///
/// Identifiers are never reused: deleting a recipe retires its id for the
/// lifetime of the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub i64);

impl RecipeId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty label derived from cooking time and ingredient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// Classify a recipe from its cooking time (minutes) and ingredient
    /// count.
    ///
    /// The boundaries are inclusive on the high side: 10 minutes counts as
    /// long, 4 ingredients counts as many.
    pub fn classify(cooking_time: u32, num_ingredients: usize) -> Self {
        match (cooking_time < 10, num_ingredients < 4) {
            (true, true) => Self::Easy,
            (true, false) => Self::Medium,
            (false, true) => Self::Intermediate,
            (false, false) => Self::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Intermediate => "Intermediate",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Intermediate" => Ok(Self::Intermediate),
            "Hard" => Ok(Self::Hard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Split a stored ingredient string back into the ordered ingredient list.
///
/// An empty string yields an empty list, not a list with one empty entry.
pub fn parse_ingredients(s: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(INGREDIENT_SEPARATOR).map(str::to_string).collect()
    }
}

/// Flatten an ingredient list into the stored single-string form.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(INGREDIENT_SEPARATOR)
}

/// A persisted recipe.
///
/// Difficulty is not a field: it is recomputed from `cooking_time` and the
/// ingredient count on every read, so it can never drift out of sync with
/// its inputs. The stored difficulty column is write-only denormalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: RecipeId,

    /// Recipe name, normalized to leading-capital form
    pub name: String,

    /// Ordered ingredient list; may be empty
    pub ingredients: Vec<String>,

    /// Cooking time in minutes
    pub cooking_time: u32,
}

impl Recipe {
    /// Current difficulty of this recipe.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::classify(self.cooking_time, self.ingredients.len())
    }

    /// The ingredient list in its stored single-string form.
    pub fn ingredients_joined(&self) -> String {
        join_ingredients(&self.ingredients)
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Recipe {}: {} ({})", self.id, self.name, self.difficulty())
    }
}

/// Data for creating a new recipe, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cooking_time: u32,
}

impl NewRecipe {
    /// Build a creation payload, normalizing the name and enforcing the
    /// name and ingredient limits.
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        cooking_time: u32,
    ) -> Result<Self, ValidationError> {
        let name = crate::limits::normalize_name(name);
        validate_recipe_name(&name)?;
        validate_ingredients(&join_ingredients(&ingredients))?;
        Ok(Self {
            name,
            ingredients,
            cooking_time,
        })
    }

    /// Difficulty the recipe will have once persisted.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::classify(self.cooking_time, self.ingredients.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn classification_matches_table() {
        assert_eq!(Difficulty::classify(5, 2), Difficulty::Easy);
        assert_eq!(Difficulty::classify(5, 6), Difficulty::Medium);
        assert_eq!(Difficulty::classify(30, 2), Difficulty::Intermediate);
        assert_eq!(Difficulty::classify(30, 6), Difficulty::Hard);
    }

    #[test]
    fn classification_boundaries() {
        // 10 minutes is the long side, 4 ingredients is the many side
        assert_eq!(Difficulty::classify(9, 3), Difficulty::Easy);
        assert_eq!(Difficulty::classify(10, 3), Difficulty::Intermediate);
        assert_eq!(Difficulty::classify(9, 4), Difficulty::Medium);
        assert_eq!(Difficulty::classify(10, 4), Difficulty::Hard);
        assert_eq!(Difficulty::classify(0, 0), Difficulty::Easy);
    }

    #[test]
    fn difficulty_round_trips_through_string() {
        for d in [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Intermediate,
            Difficulty::Hard,
        ] {
            assert_eq!(Difficulty::from_str(d.as_str()).unwrap(), d);
        }
        assert!(Difficulty::from_str("Impossible").is_err());
    }

    #[test]
    fn parse_ingredients_handles_empty() {
        assert!(parse_ingredients("").is_empty());
        assert_eq!(parse_ingredients("egg"), vec!["egg"]);
        assert_eq!(
            parse_ingredients("egg, flour, milk"),
            vec!["egg", "flour", "milk"]
        );
    }

    #[test]
    fn ingredients_round_trip() {
        let list = vec!["egg".to_string(), "flour".to_string(), "milk".to_string()];
        assert_eq!(parse_ingredients(&join_ingredients(&list)), list);
    }

    #[test]
    fn new_recipe_normalizes_and_classifies() {
        let recipe = NewRecipe::new(
            "pancakes",
            vec!["egg".to_string(), "flour".to_string(), "milk".to_string()],
            8,
        )
        .unwrap();
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn new_recipe_rejects_bad_name() {
        assert!(NewRecipe::new("pasta 2000", Vec::new(), 5).is_err());
        assert!(NewRecipe::new("", Vec::new(), 5).is_err());
    }

    #[test]
    fn recipe_difficulty_follows_mutation() {
        let mut recipe = Recipe {
            id: RecipeId(1),
            name: "Soup".to_string(),
            ingredients: vec!["water".to_string(), "salt".to_string()],
            cooking_time: 5,
        };
        assert_eq!(recipe.difficulty(), Difficulty::Easy);

        recipe.cooking_time = 45;
        assert_eq!(recipe.difficulty(), Difficulty::Intermediate);

        recipe.ingredients.extend([
            "leek".to_string(),
            "potato".to_string(),
        ]);
        assert_eq!(recipe.difficulty(), Difficulty::Hard);
    }
}
