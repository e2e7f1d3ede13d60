//! SQLite storage backend

use crate::error::{StorageError, StorageResult};
use crate::traits::RecipeStore;
use async_trait::async_trait;
use ladle_core::{join_ingredients, parse_ingredients, NewRecipe, Recipe, RecipeId};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

/// SQLite storage backend.
///
/// The `recipes` table uses `AUTOINCREMENT`, which guarantees that an id
/// retired by a delete is never handed out again.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        tracing::debug!("Opening recipe database at {:?}", path.as_ref());
        let conn = Connection::open(path)?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_tables()?;

        Ok(store)
    }

    /// Create an in-memory SQLite database (for testing)
    pub fn in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_tables()?;

        Ok(store)
    }

    fn init_tables(&self) -> StorageResult<()> {
        let conn = self.lock_conn()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                ingredients TEXT NOT NULL,
                cooking_time INTEGER NOT NULL,
                difficulty TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    fn lock_conn(&self) -> StorageResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StorageError::Database(e.to_string()))
    }
}

fn row_to_recipe(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, i64)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn recipe_from_columns(
    id: i64,
    name: String,
    ingredients: String,
    cooking_time: i64,
) -> StorageResult<Recipe> {
    let cooking_time = u32::try_from(cooking_time).map_err(|_| StorageError::CorruptRecord {
        id,
        reason: format!("negative cooking time {}", cooking_time),
    })?;
    Ok(Recipe {
        id: RecipeId(id),
        name,
        ingredients: parse_ingredients(&ingredients),
        cooking_time,
    })
}

#[async_trait]
impl RecipeStore for SqliteStore {
    async fn initialize(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn add_recipe(&self, new: &NewRecipe) -> StorageResult<Recipe> {
        let conn = self.lock_conn()?;

        conn.execute(
            "INSERT INTO recipes (name, ingredients, cooking_time, difficulty) VALUES (?1, ?2, ?3, ?4)",
            params![
                new.name,
                join_ingredients(&new.ingredients),
                new.cooking_time,
                new.difficulty().as_str()
            ],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!("Created recipe {}: {}", id, new.name);

        Ok(Recipe {
            id: RecipeId(id),
            name: new.name.clone(),
            ingredients: new.ingredients.clone(),
            cooking_time: new.cooking_time,
        })
    }

    async fn get_recipe(&self, id: RecipeId) -> StorageResult<Option<Recipe>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, ingredients, cooking_time FROM recipes WHERE id = ?1",
        )?;

        match stmt.query_row(params![id.as_i64()], row_to_recipe) {
            Ok((id, name, ingredients, time)) => {
                Ok(Some(recipe_from_columns(id, name, ingredients, time)?))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_recipes(&self) -> StorageResult<Vec<Recipe>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn
            .prepare("SELECT id, name, ingredients, cooking_time FROM recipes ORDER BY id")?;
        let rows = stmt.query_map([], row_to_recipe)?;

        let mut recipes = Vec::new();
        for row in rows {
            let (id, name, ingredients, time) = row?;
            recipes.push(recipe_from_columns(id, name, ingredients, time)?);
        }

        Ok(recipes)
    }

    async fn update_recipe(&self, recipe: &Recipe) -> StorageResult<()> {
        let conn = self.lock_conn()?;

        let changed = conn.execute(
            "UPDATE recipes SET name = ?1, ingredients = ?2, cooking_time = ?3, difficulty = ?4 WHERE id = ?5",
            params![
                recipe.name,
                recipe.ingredients_joined(),
                recipe.cooking_time,
                recipe.difficulty().as_str(),
                recipe.id.as_i64()
            ],
        )?;

        if changed == 0 {
            return Err(StorageError::RecipeNotFound(recipe.id.as_i64()));
        }

        tracing::info!("Updated recipe {}: {}", recipe.id, recipe.name);
        Ok(())
    }

    async fn delete_recipe(&self, id: RecipeId) -> StorageResult<()> {
        let conn = self.lock_conn()?;

        let changed = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id.as_i64()])?;

        if changed == 0 {
            return Err(StorageError::RecipeNotFound(id.as_i64()));
        }

        tracing::info!("Deleted recipe {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_core::Difficulty;

    fn new_recipe(name: &str, ingredients: &[&str], time: u32) -> NewRecipe {
        NewRecipe::new(
            name,
            ingredients.iter().map(|s| s.to_string()).collect(),
            time,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let store = SqliteStore::in_memory().unwrap();
        store.initialize().await.unwrap();

        let created = store
            .add_recipe(&new_recipe("pancakes", &["egg", "flour", "milk"], 8))
            .await
            .unwrap();
        assert_eq!(created.name, "Pancakes");
        assert_eq!(created.difficulty(), Difficulty::Easy);

        let fetched = store.get_recipe(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.ingredients, vec!["egg", "flour", "milk"]);

        store.delete_recipe(created.id).await.unwrap();
        assert!(store.get_recipe(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let store = SqliteStore::in_memory().unwrap();

        let a = store.add_recipe(&new_recipe("tea", &[], 2)).await.unwrap();
        let b = store
            .add_recipe(&new_recipe("toast", &["bread"], 3))
            .await
            .unwrap();

        let all = store.list_recipes().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].id, b.id);
        assert!(a.id < b.id);
    }

    #[tokio::test]
    async fn update_rewrites_difficulty_column() {
        let store = SqliteStore::in_memory().unwrap();

        let mut recipe = store
            .add_recipe(&new_recipe("soup", &["water", "salt"], 5))
            .await
            .unwrap();
        assert_eq!(recipe.difficulty(), Difficulty::Easy);

        recipe.cooking_time = 40;
        store.update_recipe(&recipe).await.unwrap();

        let fetched = store.get_recipe(recipe.id).await.unwrap().unwrap();
        assert_eq!(fetched.cooking_time, 40);
        assert_eq!(fetched.difficulty(), Difficulty::Intermediate);
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_fail() {
        let store = SqliteStore::in_memory().unwrap();

        let ghost = Recipe {
            id: RecipeId(99),
            name: "Ghost".to_string(),
            ingredients: Vec::new(),
            cooking_time: 1,
        };
        assert!(matches!(
            store.update_recipe(&ghost).await,
            Err(StorageError::RecipeNotFound(99))
        ));
        assert!(matches!(
            store.delete_recipe(RecipeId(99)).await,
            Err(StorageError::RecipeNotFound(99))
        ));
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = SqliteStore::in_memory().unwrap();

        let first = store.add_recipe(&new_recipe("tea", &[], 2)).await.unwrap();
        store.delete_recipe(first.id).await.unwrap();

        let second = store.add_recipe(&new_recipe("tea", &[], 2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn reopens_existing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.db");

        let id = {
            let store = SqliteStore::open(&path).unwrap();
            store
                .add_recipe(&new_recipe("stew", &["beef", "carrot"], 90))
                .await
                .unwrap()
                .id
        };

        let store = SqliteStore::open(&path).unwrap();
        let fetched = store.get_recipe(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Stew");
    }
}
