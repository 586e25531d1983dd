//! MySQL category repository implementation.

use crate::{traits::CategoryRepository, DatabasePool};
use async_trait::async_trait;
use menuboard_core::{Category, MenuboardResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL category repository implementation.
#[derive(Clone)]
pub struct MySqlCategoryRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlCategoryRepository {
    /// Creates a new MySQL category repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a category.
#[derive(Debug, FromRow)]
struct CategoryRow {
    category_code: i32,
    category_name: String,
    ref_category_code: Option<i32>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            category_code: row.category_code,
            category_name: row.category_name,
            ref_category_code: row.ref_category_code,
        }
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Category>> {
        debug!("Finding category by code: {}", code);

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_code, category_name, ref_category_code
            FROM tbl_category
            WHERE category_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Category::from))
    }

    async fn find_sub_categories(&self) -> MenuboardResult<Vec<Category>> {
        debug!("Finding sub-categories");

        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_code, category_name, ref_category_code
            FROM tbl_category
            WHERE ref_category_code IS NOT NULL
            ORDER BY category_code DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}

impl std::fmt::Debug for MySqlCategoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCategoryRepository")
            .finish_non_exhaustive()
    }
}
