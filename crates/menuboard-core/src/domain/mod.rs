//! Domain entities for the menu catalog.

pub mod category;
pub mod menu;

pub use category::Category;
pub use menu::Menu;
