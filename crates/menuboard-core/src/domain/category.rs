//! Category entity.

use serde::{Deserialize, Serialize};

/// A classification for menu items, optionally nested under a parent
/// category. Categories are read-only in this scope; the taxonomy is seeded
/// by migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, externally assigned.
    pub category_code: i32,

    /// Display name of the category.
    pub category_name: String,

    /// Parent category code; `None` for top-level categories.
    pub ref_category_code: Option<i32>,
}

impl Category {
    /// Returns true if this category sits under a parent category.
    #[must_use]
    pub const fn is_sub_category(&self) -> bool {
        self.ref_category_code.is_some()
    }
}
