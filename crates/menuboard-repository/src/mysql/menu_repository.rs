//! MySQL menu repository implementation.

use crate::{traits::MenuRepository, DatabasePool};
use async_trait::async_trait;
use menuboard_core::{Menu, MenuSort, MenuboardError, MenuboardResult, Page, PageRequest};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const MENU_COLUMNS: &str =
    "menu_code, menu_name, menu_price, category_code, orderable_status";

/// MySQL menu repository implementation.
#[derive(Clone)]
pub struct MySqlMenuRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlMenuRepository {
    /// Creates a new MySQL menu repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a menu.
#[derive(Debug, FromRow)]
struct MenuRow {
    menu_code: i32,
    menu_name: String,
    menu_price: i32,
    category_code: i32,
    orderable_status: String,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            menu_code: row.menu_code,
            menu_name: row.menu_name,
            menu_price: row.menu_price,
            category_code: row.category_code,
            orderable_status: row.orderable_status,
        }
    }
}

#[async_trait]
impl MenuRepository for MySqlMenuRepository {
    async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Menu>> {
        debug!("Finding menu by code: {}", code);

        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu WHERE menu_code = ?"
        ))
        .bind(code)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Menu::from))
    }

    async fn find_all(&self) -> MenuboardResult<Vec<Menu>> {
        debug!("Finding all menus");

        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu \
             ORDER BY category_code ASC, menu_price DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn find_page(&self, page: PageRequest, sort: MenuSort) -> MenuboardResult<Page<Menu>> {
        debug!(
            "Finding menu page: {}, size: {}, sort: {}",
            page.page,
            page.size,
            sort.order_by()
        );

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tbl_menu")
            .fetch_one(self.pool.inner())
            .await?;

        // order_by() only emits whitelisted column names
        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu ORDER BY {} LIMIT ? OFFSET ?",
            sort.order_by()
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool.inner())
        .await?;

        let menus: Vec<Menu> = rows.into_iter().map(Menu::from).collect();

        Ok(Page::new(menus, page.page, page.size, total as u64))
    }

    async fn find_by_price_at_least(&self, price: i32) -> MenuboardResult<Vec<Menu>> {
        debug!("Finding menus priced at least: {}", price);

        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu \
             WHERE menu_price >= ? ORDER BY menu_price DESC"
        ))
        .bind(price)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn find_by_name_containing(&self, name: &str) -> MenuboardResult<Vec<Menu>> {
        debug!("Finding menus with name containing: {}", name);

        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu \
             WHERE menu_name LIKE CONCAT('%', ?, '%')"
        ))
        .bind(name)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn find_by_price_at_least_and_name_containing(
        &self,
        price: i32,
        name: &str,
    ) -> MenuboardResult<Vec<Menu>> {
        debug!(
            "Finding menus priced at least {} with name containing: {}",
            price, name
        );

        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu \
             WHERE menu_price >= ? AND menu_name LIKE CONCAT('%', ?, '%') \
             ORDER BY menu_price DESC"
        ))
        .bind(price)
        .bind(name)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn save(&self, menu: &Menu) -> MenuboardResult<Menu> {
        debug!("Saving new menu: {}", menu.menu_name);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO tbl_menu (menu_name, menu_price, category_code, orderable_status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&menu.menu_name)
        .bind(menu.menu_price)
        .bind(menu.category_code)
        .bind(&menu.orderable_status)
        .execute(self.pool.inner())
        .await?;

        let code = i32::try_from(result.last_insert_id()).map_err(|_| {
            MenuboardError::Mapping(format!(
                "Generated menu code {} does not fit the identity type",
                result.last_insert_id()
            ))
        })?;

        self.find_by_code(code)
            .await?
            .ok_or_else(|| MenuboardError::Internal("Failed to fetch inserted menu".to_string()))
    }

    async fn update(&self, menu: &Menu) -> MenuboardResult<Menu> {
        debug!("Updating menu: {}", menu.menu_code);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE tbl_menu
            SET menu_name = ?, menu_price = ?, category_code = ?, orderable_status = ?
            WHERE menu_code = ?
            "#,
        )
        .bind(&menu.menu_name)
        .bind(menu.menu_price)
        .bind(menu.category_code)
        .bind(&menu.orderable_status)
        .bind(menu.menu_code)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(MenuboardError::not_found("invalid menu number"));
        }

        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM tbl_menu WHERE menu_code = ?"
        ))
        .bind(menu.menu_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Menu::from(row))
    }

    async fn delete(&self, code: i32) -> MenuboardResult<bool> {
        debug!("Deleting menu: {}", code);

        let result = sqlx::query("DELETE FROM tbl_menu WHERE menu_code = ?")
            .bind(code)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> MenuboardResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tbl_menu")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlMenuRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlMenuRepository").finish_non_exhaustive()
    }
}
