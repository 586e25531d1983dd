//! Menu service implementation.

use crate::dto::{
    CategoryResponse, MenuPageResponse, MenuResponse, ModifyMenuRequest, RegistMenuRequest,
};
use crate::menu_service::MenuService;
use crate::search::MenuSearch;
use async_trait::async_trait;
use menuboard_core::{Menu, MenuSort, MenuboardError, MenuboardResult, PageRequest, PageWindow, ValidateExt};
use menuboard_repository::{CategoryRepository, MenuRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Generic menu service implementation.
pub struct MenuServiceImpl<M: MenuRepository, C: CategoryRepository> {
    menu_repository: Arc<M>,
    category_repository: Arc<C>,
    page_per_block: u64,
}

impl<M: MenuRepository, C: CategoryRepository> MenuServiceImpl<M, C> {
    /// Creates a new menu service with the default page link block width.
    pub fn new(menu_repository: Arc<M>, category_repository: Arc<C>) -> Self {
        Self {
            menu_repository,
            category_repository,
            page_per_block: PageWindow::DEFAULT_BLOCK,
        }
    }

    /// Overrides the page link block width.
    #[must_use]
    pub fn with_page_per_block(mut self, page_per_block: u64) -> Self {
        self.page_per_block = page_per_block;
        self
    }
}

#[async_trait]
impl<M, C> MenuService for MenuServiceImpl<M, C>
where
    M: MenuRepository + 'static,
    C: CategoryRepository + 'static,
{
    async fn find_menu_by_code(&self, code: i32) -> MenuboardResult<MenuResponse> {
        debug!("Getting menu: {}", code);

        let menu = self
            .menu_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| MenuboardError::not_found("invalid menu code."))?;

        Ok(MenuResponse::from(menu))
    }

    async fn find_menu_list(
        &self,
        page: PageRequest,
        sort: MenuSort,
    ) -> MenuboardResult<MenuPageResponse> {
        debug!("Listing menus, page: {}, size: {}", page.page, page.size);

        let menus = self.menu_repository.find_page(page, sort).await?;
        Ok(MenuPageResponse::from_page(menus, self.page_per_block))
    }

    async fn find_all_menus(&self) -> MenuboardResult<Vec<MenuResponse>> {
        debug!("Listing all menus");

        let menus = self.menu_repository.find_all().await?;
        Ok(menus.into_iter().map(MenuResponse::from).collect())
    }

    async fn search_menus(&self, search: MenuSearch) -> MenuboardResult<Vec<MenuResponse>> {
        debug!("Searching menus: {:?}", search);

        let menus = match search {
            MenuSearch::ByPrice(price) => {
                self.menu_repository.find_by_price_at_least(price).await?
            }
            MenuSearch::ByName(name) => {
                self.menu_repository.find_by_name_containing(&name).await?
            }
            MenuSearch::ByPriceAndName(price, name) => {
                self.menu_repository
                    .find_by_price_at_least_and_name_containing(price, &name)
                    .await?
            }
        };

        Ok(menus.into_iter().map(MenuResponse::from).collect())
    }

    async fn find_sub_categories(&self) -> MenuboardResult<Vec<CategoryResponse>> {
        debug!("Listing sub-categories");

        let categories = self.category_repository.find_sub_categories().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn register_menu(&self, request: RegistMenuRequest) -> MenuboardResult<MenuResponse> {
        debug!("Registering menu: {}", request.menu_name);

        request.validate_request()?;

        let draft = Menu::from(request);
        let saved = self.menu_repository.save(&draft).await?;

        info!("Menu registered: {}", saved.menu_code);
        Ok(MenuResponse::from(saved))
    }

    async fn modify_menu(&self, request: ModifyMenuRequest) -> MenuboardResult<MenuResponse> {
        debug!("Modifying menu: {}", request.menu_code);

        request.validate_request()?;

        let mut menu = self
            .menu_repository
            .find_by_code(request.menu_code)
            .await?
            .ok_or_else(|| MenuboardError::not_found("invalid menu number"))?;

        menu.overwrite(
            request.menu_name,
            request.menu_price,
            request.category_code,
            request.orderable_status,
        );

        let updated = self.menu_repository.update(&menu).await?;

        info!("Menu modified: {}", updated.menu_code);
        Ok(MenuResponse::from(updated))
    }

    async fn remove_menu(&self, code: i32) -> MenuboardResult<()> {
        debug!("Removing menu: {}", code);

        // Load first so a missing code is rejected before anything is deleted
        let menu = self
            .menu_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| MenuboardError::not_found("invalid menu number"))?;

        self.menu_repository.delete(menu.menu_code).await?;

        info!("Menu removed: {}", code);
        Ok(())
    }
}

impl<M: MenuRepository, C: CategoryRepository> std::fmt::Debug for MenuServiceImpl<M, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuboard_core::{Category, Page, SortDirection, SortField};
    use std::cmp::Ordering;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryMenuRepository {
        menus: Mutex<HashMap<i32, Menu>>,
        next_code: Mutex<i32>,
        delete_calls: Mutex<Vec<i32>>,
    }

    impl InMemoryMenuRepository {
        fn new() -> Self {
            Self {
                menus: Mutex::new(HashMap::new()),
                next_code: Mutex::new(1),
                delete_calls: Mutex::new(Vec::new()),
            }
        }

        fn with_menus(menus: Vec<Menu>) -> Self {
            let repo = Self::new();
            let mut max_code = 0;
            for menu in menus {
                max_code = max_code.max(menu.menu_code);
                repo.menus.lock().unwrap().insert(menu.menu_code, menu);
            }
            *repo.next_code.lock().unwrap() = max_code + 1;
            repo
        }

        fn compare(sort: MenuSort, a: &Menu, b: &Menu) -> Ordering {
            let ord = match sort.field {
                SortField::MenuCode => a.menu_code.cmp(&b.menu_code),
                SortField::MenuName => a.menu_name.cmp(&b.menu_name),
                SortField::MenuPrice => a.menu_price.cmp(&b.menu_price),
                SortField::CategoryCode => a.category_code.cmp(&b.category_code),
            };
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }

    #[async_trait]
    impl MenuRepository for InMemoryMenuRepository {
        async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Menu>> {
            Ok(self.menus.lock().unwrap().get(&code).cloned())
        }

        async fn find_all(&self) -> MenuboardResult<Vec<Menu>> {
            let mut menus: Vec<Menu> = self.menus.lock().unwrap().values().cloned().collect();
            menus.sort_by(|a, b| {
                a.category_code
                    .cmp(&b.category_code)
                    .then(b.menu_price.cmp(&a.menu_price))
            });
            Ok(menus)
        }

        async fn find_page(
            &self,
            page: PageRequest,
            sort: MenuSort,
        ) -> MenuboardResult<Page<Menu>> {
            let mut menus: Vec<Menu> = self.menus.lock().unwrap().values().cloned().collect();
            menus.sort_by(|a, b| Self::compare(sort, a, b));
            let total = menus.len() as u64;
            let start = page.offset();
            let end = std::cmp::min(start + page.limit(), menus.len());
            let items = if start < menus.len() {
                menus[start..end].to_vec()
            } else {
                vec![]
            };
            Ok(Page::new(items, page.page, page.size, total))
        }

        async fn find_by_price_at_least(&self, price: i32) -> MenuboardResult<Vec<Menu>> {
            let mut menus: Vec<Menu> = self
                .menus
                .lock()
                .unwrap()
                .values()
                .filter(|m| m.menu_price >= price)
                .cloned()
                .collect();
            menus.sort_by(|a, b| b.menu_price.cmp(&a.menu_price));
            Ok(menus)
        }

        async fn find_by_name_containing(&self, name: &str) -> MenuboardResult<Vec<Menu>> {
            Ok(self
                .menus
                .lock()
                .unwrap()
                .values()
                .filter(|m| m.menu_name.contains(name))
                .cloned()
                .collect())
        }

        async fn find_by_price_at_least_and_name_containing(
            &self,
            price: i32,
            name: &str,
        ) -> MenuboardResult<Vec<Menu>> {
            let mut menus: Vec<Menu> = self
                .menus
                .lock()
                .unwrap()
                .values()
                .filter(|m| m.menu_price >= price && m.menu_name.contains(name))
                .cloned()
                .collect();
            menus.sort_by(|a, b| b.menu_price.cmp(&a.menu_price));
            Ok(menus)
        }

        async fn save(&self, menu: &Menu) -> MenuboardResult<Menu> {
            let mut next = self.next_code.lock().unwrap();
            let mut saved = menu.clone();
            saved.menu_code = *next;
            *next += 1;
            self.menus
                .lock()
                .unwrap()
                .insert(saved.menu_code, saved.clone());
            Ok(saved)
        }

        async fn update(&self, menu: &Menu) -> MenuboardResult<Menu> {
            let mut menus = self.menus.lock().unwrap();
            if !menus.contains_key(&menu.menu_code) {
                return Err(MenuboardError::not_found("invalid menu number"));
            }
            menus.insert(menu.menu_code, menu.clone());
            Ok(menu.clone())
        }

        async fn delete(&self, code: i32) -> MenuboardResult<bool> {
            self.delete_calls.lock().unwrap().push(code);
            Ok(self.menus.lock().unwrap().remove(&code).is_some())
        }

        async fn count(&self) -> MenuboardResult<u64> {
            Ok(self.menus.lock().unwrap().len() as u64)
        }
    }

    struct InMemoryCategoryRepository {
        categories: Vec<Category>,
    }

    impl InMemoryCategoryRepository {
        fn sample() -> Self {
            Self {
                categories: vec![
                    Category {
                        category_code: 1,
                        category_name: "식사".to_string(),
                        ref_category_code: None,
                    },
                    Category {
                        category_code: 4,
                        category_name: "한식".to_string(),
                        ref_category_code: Some(1),
                    },
                    Category {
                        category_code: 8,
                        category_name: "커피".to_string(),
                        ref_category_code: Some(2),
                    },
                ],
            }
        }
    }

    #[async_trait]
    impl CategoryRepository for InMemoryCategoryRepository {
        async fn find_by_code(&self, code: i32) -> MenuboardResult<Option<Category>> {
            Ok(self
                .categories
                .iter()
                .find(|c| c.category_code == code)
                .cloned())
        }

        async fn find_sub_categories(&self) -> MenuboardResult<Vec<Category>> {
            let mut subs: Vec<Category> = self
                .categories
                .iter()
                .filter(|c| c.ref_category_code.is_some())
                .cloned()
                .collect();
            subs.sort_by(|a, b| b.category_code.cmp(&a.category_code));
            Ok(subs)
        }
    }

    fn menu(code: i32, name: &str, price: i32, category: i32) -> Menu {
        Menu {
            menu_code: code,
            menu_name: name.to_string(),
            menu_price: price,
            category_code: category,
            orderable_status: "Y".to_string(),
        }
    }

    fn sample_menus() -> Vec<Menu> {
        vec![
            menu(1, "열무김치라떼", 4500, 8),
            menu(2, "우럭스무디", 5000, 9),
            menu(3, "앙버터김치찜", 13000, 4),
            menu(4, "마늘벌꿀빙수", 12000, 10),
            menu(5, "김치맛탕", 8000, 7),
        ]
    }

    fn service_with(
        menus: Vec<Menu>,
    ) -> MenuServiceImpl<InMemoryMenuRepository, InMemoryCategoryRepository> {
        MenuServiceImpl::new(
            Arc::new(InMemoryMenuRepository::with_menus(menus)),
            Arc::new(InMemoryCategoryRepository::sample()),
        )
    }

    #[tokio::test]
    async fn test_find_menu_by_code() {
        let service = service_with(sample_menus());

        let found = service.find_menu_by_code(2).await.unwrap();
        assert_eq!(found.menu_name, "우럭스무디");
        assert_eq!(found.menu_price, 5000);
    }

    #[tokio::test]
    async fn test_find_menu_by_code_not_found() {
        let service = service_with(sample_menus());

        let err = service.find_menu_by_code(99).await.unwrap_err();
        assert!(matches!(err, MenuboardError::NotFound(_)));
        assert_eq!(err.to_string(), "invalid menu code.");
    }

    #[tokio::test]
    async fn test_find_menu_list_default_order() {
        let service = service_with(sample_menus());

        let listing = service
            .find_menu_list(PageRequest::new(0, 2), MenuSort::default_listing())
            .await
            .unwrap();

        let codes: Vec<i32> = listing.menu_list.iter().map(|m| m.menu_code).collect();
        assert_eq!(codes, vec![5, 4]);
        assert_eq!(listing.window.total_count, 5);
        assert_eq!(listing.window.total_page, 3);
        assert_eq!(listing.window.page, 1);
        assert_eq!(listing.window.begin_page, 1);
        assert_eq!(listing.window.end_page, 3);
        assert!(listing.window.is_first);
        assert!(!listing.window.is_last);
    }

    #[tokio::test]
    async fn test_find_menu_list_custom_sort() {
        let service = service_with(sample_menus());

        let listing = service
            .find_menu_list(
                PageRequest::new(0, 10),
                MenuSort::new(SortField::MenuPrice, SortDirection::Asc),
            )
            .await
            .unwrap();

        let prices: Vec<i32> = listing.menu_list.iter().map(|m| m.menu_price).collect();
        assert_eq!(prices, vec![4500, 5000, 8000, 12000, 13000]);
    }

    #[tokio::test]
    async fn test_find_menu_list_empty_catalog() {
        let service = service_with(vec![]);

        let listing = service
            .find_menu_list(PageRequest::first(), MenuSort::default_listing())
            .await
            .unwrap();

        assert!(listing.menu_list.is_empty());
        assert_eq!(listing.window.total_page, 0);
        assert_eq!(listing.window.begin_page, 1);
        assert_eq!(listing.window.end_page, 0);
    }

    #[tokio::test]
    async fn test_find_all_menus_grouped_by_category() {
        let service = service_with(sample_menus());

        let menus = service.find_all_menus().await.unwrap();
        let categories: Vec<i32> = menus.iter().map(|m| m.category_code).collect();
        assert_eq!(categories, vec![4, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn test_search_by_price() {
        let service = service_with(sample_menus());

        let results = service
            .search_menus(MenuSearch::ByPrice(10000))
            .await
            .unwrap();

        let prices: Vec<i32> = results.iter().map(|m| m.menu_price).collect();
        assert_eq!(prices, vec![13000, 12000]);
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let service = service_with(sample_menus());

        let results = service
            .search_menus(MenuSearch::ByName("김치".to_string()))
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_search_by_price_and_name() {
        let service = service_with(sample_menus());

        let results = service
            .search_menus(MenuSearch::ByPriceAndName(10000, "마늘".to_string()))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].menu_name, "마늘벌꿀빙수");
    }

    #[tokio::test]
    async fn test_search_with_no_match_is_empty() {
        let service = service_with(sample_menus());

        let results = service
            .search_menus(MenuSearch::ByName("피자".to_string()))
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_find_sub_categories() {
        let service = service_with(vec![]);

        let categories = service.find_sub_categories().await.unwrap();
        let codes: Vec<i32> = categories.iter().map(|c| c.category_code).collect();
        assert_eq!(codes, vec![8, 4]);
    }

    #[tokio::test]
    async fn test_register_menu() {
        let service = service_with(sample_menus());

        let registered = service
            .register_menu(RegistMenuRequest {
                menu_name: "갈치파르페".to_string(),
                menu_price: 7000,
                category_code: 10,
                orderable_status: "Y".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(registered.menu_code, 6);

        let found = service.find_menu_by_code(6).await.unwrap();
        assert_eq!(found.menu_name, "갈치파르페");
    }

    #[tokio::test]
    async fn test_register_menu_rejects_invalid_request() {
        let service = service_with(vec![]);

        let err = service
            .register_menu(RegistMenuRequest {
                menu_name: String::new(),
                menu_price: 7000,
                category_code: 10,
                orderable_status: "Y".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MenuboardError::Validation(_)));
    }

    #[tokio::test]
    async fn test_modify_menu_overwrites_fields() {
        let service = service_with(sample_menus());

        let modified = service
            .modify_menu(ModifyMenuRequest {
                menu_code: 3,
                menu_name: "빙수김치찜".to_string(),
                menu_price: 14000,
                category_code: 4,
                orderable_status: "N".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(modified.menu_code, 3);
        assert_eq!(modified.menu_name, "빙수김치찜");
        assert_eq!(modified.menu_price, 14000);
        assert_eq!(modified.orderable_status, "N");

        let found = service.find_menu_by_code(3).await.unwrap();
        assert_eq!(found, modified);
    }

    #[tokio::test]
    async fn test_modify_missing_menu_fails() {
        let service = service_with(sample_menus());

        let err = service
            .modify_menu(ModifyMenuRequest {
                menu_code: 99,
                menu_name: "유령메뉴".to_string(),
                menu_price: 1000,
                category_code: 4,
                orderable_status: "Y".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MenuboardError::NotFound(_)));
        assert_eq!(err.to_string(), "invalid menu number");
    }

    #[tokio::test]
    async fn test_remove_menu() {
        let service = service_with(sample_menus());

        service.remove_menu(1).await.unwrap();

        let err = service.find_menu_by_code(1).await.unwrap_err();
        assert!(matches!(err, MenuboardError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_missing_menu_fails() {
        let service = service_with(vec![]);

        let err = service.remove_menu(42).await.unwrap_err();
        assert!(matches!(err, MenuboardError::NotFound(_)));
        assert_eq!(err.to_string(), "invalid menu number");
    }

    #[tokio::test]
    async fn test_remove_loads_before_deleting() {
        let repository = Arc::new(InMemoryMenuRepository::with_menus(sample_menus()));
        let service = MenuServiceImpl::new(
            repository.clone(),
            Arc::new(InMemoryCategoryRepository::sample()),
        );

        let err = service.remove_menu(42).await.unwrap_err();
        assert!(matches!(err, MenuboardError::NotFound(_)));
        assert!(repository.delete_calls.lock().unwrap().is_empty());

        service.remove_menu(1).await.unwrap();
        assert_eq!(*repository.delete_calls.lock().unwrap(), vec![1]);
    }
}
