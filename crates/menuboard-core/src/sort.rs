//! Sort descriptors for menu listing queries.
//!
//! The sortable fields form a closed whitelist: each variant maps to a fixed
//! column name, so caller-supplied sort text can never reach the SQL layer
//! unescaped.

use crate::MenuboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A menu field that listings may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    MenuCode,
    MenuName,
    MenuPrice,
    CategoryCode,
}

impl SortField {
    /// Returns the database column backing this field.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::MenuCode => "menu_code",
            Self::MenuName => "menu_name",
            Self::MenuPrice => "menu_price",
            Self::CategoryCode => "category_code",
        }
    }
}

impl FromStr for SortField {
    type Err = MenuboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menuCode" => Ok(Self::MenuCode),
            "menuName" => Ok(Self::MenuName),
            "menuPrice" => Ok(Self::MenuPrice),
            "categoryCode" => Ok(Self::CategoryCode),
            _ => Err(MenuboardError::validation(format!(
                "unknown sort field: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MenuCode => write!(f, "menuCode"),
            Self::MenuName => write!(f, "menuName"),
            Self::MenuPrice => write!(f, "menuPrice"),
            Self::CategoryCode => write!(f, "categoryCode"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = MenuboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(MenuboardError::validation(format!(
                "unknown sort direction: {}",
                s
            ))),
        }
    }
}

/// A sort order for a paginated menu listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl MenuSort {
    /// Creates a new sort order.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The default listing order: menu code descending.
    #[must_use]
    pub const fn default_listing() -> Self {
        Self::new(SortField::MenuCode, SortDirection::Desc)
    }

    /// Returns the `ORDER BY` fragment for this sort.
    #[must_use]
    pub fn order_by(&self) -> String {
        format!("{} {}", self.field.column(), self.direction.keyword())
    }
}

impl FromStr for MenuSort {
    type Err = MenuboardError;

    /// Parses `"field"` or `"field,direction"` query text, e.g.
    /// `"menuPrice,desc"`. A missing direction defaults to ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts
            .next()
            .ok_or_else(|| MenuboardError::validation("empty sort expression"))?
            .trim()
            .parse::<SortField>()?;
        let direction = match parts.next() {
            Some(dir) => dir.trim().parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };
        Ok(Self::new(field, direction))
    }
}

impl Default for MenuSort {
    fn default() -> Self {
        Self::default_listing()
    }
}
