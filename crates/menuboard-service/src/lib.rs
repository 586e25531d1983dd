//! # Menuboard Service
//!
//! Business logic for the menu catalog. Controllers talk to the
//! [`MenuService`] trait; [`MenuServiceImpl`] is the production
//! implementation over the repository layer.

pub mod dto;
pub mod mappers;
pub mod menu_service;
pub mod search;
pub mod r#impl;

pub use menu_service::MenuService;
pub use r#impl::MenuServiceImpl;
pub use search::MenuSearch;
