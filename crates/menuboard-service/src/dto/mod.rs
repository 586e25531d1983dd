//! Data transfer objects.

mod category_dto;
mod menu_dto;

pub use category_dto::CategoryResponse;
pub use menu_dto::{MenuPageResponse, MenuResponse, ModifyMenuRequest, RegistMenuRequest};
