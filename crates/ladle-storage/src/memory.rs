//! In-memory storage backend for testing

use crate::error::{StorageError, StorageResult};
use crate::traits::RecipeStore;
use async_trait::async_trait;
use ladle_core::{NewRecipe, Recipe, RecipeId};
use std::collections::BTreeMap;
use std::sync::RwLock;

struct Inner {
    recipes: BTreeMap<i64, Recipe>,
    // Monotonic; deletions do not roll it back, matching AUTOINCREMENT.
    next_id: i64,
}

/// In-memory storage backend.
///
/// The test double for the SQLite store: same id-assignment and
/// never-reuse behavior, no file on disk.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                recipes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn initialize(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn add_recipe(&self, new: &NewRecipe) -> StorageResult<Recipe> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;

        let id = inner.next_id;
        inner.next_id += 1;

        let recipe = Recipe {
            id: RecipeId(id),
            name: new.name.clone(),
            ingredients: new.ingredients.clone(),
            cooking_time: new.cooking_time,
        };
        inner.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn get_recipe(&self, id: RecipeId) -> StorageResult<Option<Recipe>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        Ok(inner.recipes.get(&id.as_i64()).cloned())
    }

    async fn list_recipes(&self) -> StorageResult<Vec<Recipe>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        Ok(inner.recipes.values().cloned().collect())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> StorageResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;

        match inner.recipes.get_mut(&recipe.id.as_i64()) {
            Some(slot) => {
                *slot = recipe.clone();
                Ok(())
            }
            None => Err(StorageError::RecipeNotFound(recipe.id.as_i64())),
        }
    }

    async fn delete_recipe(&self, id: RecipeId) -> StorageResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;

        if inner.recipes.remove(&id.as_i64()).is_none() {
            return Err(StorageError::RecipeNotFound(id.as_i64()));
        }
        Ok(())
    }
}
