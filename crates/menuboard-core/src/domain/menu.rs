//! Menu entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A purchasable catalog item with name, price, category, and orderable
/// status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Menu {
    /// Unique identifier, assigned by the store on insert. An unsaved draft
    /// carries `0`.
    pub menu_code: i32,

    /// Display name of the menu item.
    #[validate(length(min = 1, max = 100))]
    pub menu_name: String,

    /// Price in the smallest currency unit; non-negative.
    #[validate(range(min = 0))]
    pub menu_price: i32,

    /// Reference to the owning category.
    pub category_code: i32,

    /// Orderable flag, `"Y"` or `"N"`.
    pub orderable_status: String,
}

impl Menu {
    /// Creates an unsaved menu draft. The store assigns the identity when
    /// the draft is persisted.
    #[must_use]
    pub fn new(
        menu_name: String,
        menu_price: i32,
        category_code: i32,
        orderable_status: String,
    ) -> Self {
        Self {
            menu_code: 0,
            menu_name,
            menu_price,
            category_code,
            orderable_status,
        }
    }

    /// Overwrites the four mutable fields wholesale; identity is untouched.
    pub fn overwrite(
        &mut self,
        menu_name: String,
        menu_price: i32,
        category_code: i32,
        orderable_status: String,
    ) {
        self.menu_name = menu_name;
        self.menu_price = menu_price;
        self.category_code = category_code;
        self.orderable_status = orderable_status;
    }

    /// Returns true if this item can currently be ordered.
    #[must_use]
    pub fn is_orderable(&self) -> bool {
        self.orderable_status == "Y"
    }
}
