//! Entity to DTO mappings.

use crate::dto::{CategoryResponse, MenuPageResponse, MenuResponse, RegistMenuRequest};
use menuboard_core::{Category, Menu, Page, PageWindow};

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            menu_code: menu.menu_code,
            menu_name: menu.menu_name,
            menu_price: menu.menu_price,
            category_code: menu.category_code,
            orderable_status: menu.orderable_status,
        }
    }
}

impl From<&Menu> for MenuResponse {
    fn from(menu: &Menu) -> Self {
        Self {
            menu_code: menu.menu_code,
            menu_name: menu.menu_name.clone(),
            menu_price: menu.menu_price,
            category_code: menu.category_code,
            orderable_status: menu.orderable_status.clone(),
        }
    }
}

impl From<RegistMenuRequest> for Menu {
    fn from(request: RegistMenuRequest) -> Self {
        Menu::new(
            request.menu_name,
            request.menu_price,
            request.category_code,
            request.orderable_status,
        )
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_code: category.category_code,
            category_name: category.category_name,
            ref_category_code: category.ref_category_code,
        }
    }
}

impl MenuPageResponse {
    /// Builds a listing response from a page of menus and the block width
    /// of the page link window.
    #[must_use]
    pub fn from_page(page: Page<Menu>, page_per_block: u64) -> Self {
        let window = PageWindow::new(&page.info, page_per_block);
        Self {
            menu_list: page.content.into_iter().map(MenuResponse::from).collect(),
            window,
        }
    }
}
