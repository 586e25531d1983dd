//! MySQL repository implementations.

mod category_repository;
mod menu_repository;

pub use category_repository::MySqlCategoryRepository;
pub use menu_repository::MySqlMenuRepository;
