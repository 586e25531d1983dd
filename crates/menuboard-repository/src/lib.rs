//! # Menuboard Repository
//!
//! Data access layer for Menuboard. The service layer talks to the
//! [`MenuRepository`] and [`CategoryRepository`] traits; the MySQL
//! implementations in [`mysql`] back them with SQLx.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
