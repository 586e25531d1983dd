//! Repository trait definitions.

use async_trait::async_trait;
use menuboard_core::{Category, Menu, MenuSort, MenuboardResult, Page, PageRequest};

/// Menu repository trait.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Finds a menu by its code.
    async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Menu>>;

    /// Finds all menus, ordered by category ascending then price descending.
    async fn find_all(&self) -> MenuboardResult<Vec<Menu>>;

    /// Finds a page of menus in the given order.
    async fn find_page(&self, page: PageRequest, sort: MenuSort) -> MenuboardResult<Page<Menu>>;

    /// Finds menus priced at or above the given value, price descending.
    async fn find_by_price_at_least(&self, price: i32) -> MenuboardResult<Vec<Menu>>;

    /// Finds menus whose name contains the given substring.
    async fn find_by_name_containing(&self, name: &str) -> MenuboardResult<Vec<Menu>>;

    /// Finds menus matching both the price floor and the name substring.
    async fn find_by_price_at_least_and_name_containing(
        &self,
        price: i32,
        name: &str,
    ) -> MenuboardResult<Vec<Menu>>;

    /// Persists a new menu. The store assigns the identity; the returned
    /// menu carries it.
    async fn save(&self, menu: &Menu) -> MenuboardResult<Menu>;

    /// Updates an existing menu's mutable fields.
    async fn update(&self, menu: &Menu) -> MenuboardResult<Menu>;

    /// Deletes a menu by code. Returns false if no record matched.
    async fn delete(&self, code: i32) -> MenuboardResult<bool>;

    /// Counts all menus.
    async fn count(&self) -> MenuboardResult<u64>;
}

/// Category repository trait. Categories are read-only in this scope.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Finds a category by its code.
    async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Category>>;

    /// Finds all sub-categories (those with a parent reference), ordered by
    /// category code descending.
    async fn find_sub_categories(&self) -> MenuboardResult<Vec<Category>>;
}
