//! Result type alias for Menuboard.

use crate::MenuboardError;

/// A specialized `Result` type for Menuboard operations.
pub type MenuboardResult<T> = Result<T, MenuboardError>;
