//! Category-related DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_code: i32,
    pub category_name: String,
    pub ref_category_code: Option<i32>,
}
