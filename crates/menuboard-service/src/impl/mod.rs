//! Service implementations.

mod menu_service_impl;

pub use menu_service_impl::MenuServiceImpl;
