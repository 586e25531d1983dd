//! # Menuboard Core
//!
//! Core types, pagination math, and error definitions for the Menuboard
//! catalog service. This crate provides the foundational abstractions used
//! across all layers: the error taxonomy, the page/window calculations, the
//! sort whitelist, and the domain entities.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod sort;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use sort::*;
pub use validation::*;
