//! Menu search criteria.

use menuboard_core::{MenuboardError, MenuboardResult};

/// A parsed search criterion for the menu catalog.
///
/// Produced from the raw `type`/`query` pair at the request boundary so the
/// service layer only ever sees well-formed criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSearch {
    /// Menus priced at or above the given value.
    ByPrice(i32),
    /// Menus whose name contains the given text.
    ByName(String),
    /// Menus matching both a price floor and a name fragment.
    ByPriceAndName(i32, String),
}

impl MenuSearch {
    /// Parses a raw `type`/`query` pair.
    ///
    /// Returns `Ok(None)` for an unrecognized type; the caller answers with
    /// an empty result rather than an error. The combined form expects
    /// `"price,name"`, split on the first comma.
    pub fn from_query(search_type: &str, query: &str) -> MenuboardResult<Option<Self>> {
        match search_type {
            "price" => {
                let price: i32 = query.trim().parse()?;
                Ok(Some(Self::ByPrice(price)))
            }
            "name" => Ok(Some(Self::ByName(query.to_string()))),
            "both" => {
                let (price_text, name) = query.split_once(',').ok_or_else(|| {
                    MenuboardError::validation(
                        "combined search expects 'price,name' query text",
                    )
                })?;
                let price: i32 = price_text.trim().parse()?;
                Ok(Some(Self::ByPriceAndName(price, name.to_string())))
            }
            _ => Ok(None),
        }
    }
}
