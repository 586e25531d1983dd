//! Menu service trait.

use crate::dto::{CategoryResponse, MenuPageResponse, MenuResponse, ModifyMenuRequest, RegistMenuRequest};
use crate::search::MenuSearch;
use async_trait::async_trait;
use menuboard_core::{MenuSort, MenuboardResult, PageRequest};

/// Menu service trait defining the catalog operations.
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Returns a single menu by its code.
    async fn find_menu_by_code(&self, code: i32) -> MenuboardResult<MenuResponse>;

    /// Returns one page of the catalog listing with its page link window.
    async fn find_menu_list(
        &self,
        page: PageRequest,
        sort: MenuSort,
    ) -> MenuboardResult<MenuPageResponse>;

    /// Returns the whole catalog without pagination.
    async fn find_all_menus(&self) -> MenuboardResult<Vec<MenuResponse>>;

    /// Returns menus matching a search criterion.
    async fn search_menus(&self, search: MenuSearch) -> MenuboardResult<Vec<MenuResponse>>;

    /// Returns the selectable sub-categories.
    async fn find_sub_categories(&self) -> MenuboardResult<Vec<CategoryResponse>>;

    /// Registers a new menu and returns it with its assigned code.
    async fn register_menu(&self, request: RegistMenuRequest) -> MenuboardResult<MenuResponse>;

    /// Overwrites an existing menu's fields.
    async fn modify_menu(&self, request: ModifyMenuRequest) -> MenuboardResult<MenuResponse>;

    /// Removes a menu by its code.
    async fn remove_menu(&self, code: i32) -> MenuboardResult<()>;
}
