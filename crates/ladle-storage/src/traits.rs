//! Recipe store trait definition

use crate::error::StorageResult;
use async_trait::async_trait;
use ladle_core::{NewRecipe, Recipe, RecipeId};

/// Gateway trait over the recipe table.
///
/// Each operation that mutates issues a single commit; there are no
/// transactions spanning calls. Identifiers are assigned by the store and
/// never reused, even after deletion.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Initialize the store (create the table if absent)
    async fn initialize(&self) -> StorageResult<()>;

    /// Release the store connection
    async fn close(&self) -> StorageResult<()>;

    /// Persist a new recipe, returning it with its assigned id
    async fn add_recipe(&self, new: &NewRecipe) -> StorageResult<Recipe>;

    /// Get a recipe by id
    async fn get_recipe(&self, id: RecipeId) -> StorageResult<Option<Recipe>>;

    /// Get all recipes in ascending id order
    async fn list_recipes(&self) -> StorageResult<Vec<Recipe>>;

    /// Rewrite an existing recipe's mutable fields (and its stored
    /// difficulty); fails with `RecipeNotFound` if the id is absent
    async fn update_recipe(&self, recipe: &Recipe) -> StorageResult<()>;

    /// Delete a recipe; fails with `RecipeNotFound` if the id is absent
    async fn delete_recipe(&self, id: RecipeId) -> StorageResult<()>;
}
