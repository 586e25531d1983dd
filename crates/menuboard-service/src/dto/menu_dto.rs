//! Menu-related DTOs.

use menuboard_core::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use menuboard_core::validation::rules::{not_blank, orderable_flag};

/// Request to register a new menu.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistMenuRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Menu name must be at most 100 characters")
    )]
    pub menu_name: String,

    #[validate(range(min = 0, message = "Menu price cannot be negative"))]
    pub menu_price: i32,

    pub category_code: i32,

    #[validate(custom(function = "orderable_flag"))]
    pub orderable_status: String,
}

/// Request to modify an existing menu.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModifyMenuRequest {
    pub menu_code: i32,

    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Menu name must be at most 100 characters")
    )]
    pub menu_name: String,

    #[validate(range(min = 0, message = "Menu price cannot be negative"))]
    pub menu_price: i32,

    pub category_code: i32,

    #[validate(custom(function = "orderable_flag"))]
    pub orderable_status: String,
}

/// Menu response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub menu_code: i32,
    pub menu_name: String,
    pub menu_price: i32,
    pub category_code: i32,
    pub orderable_status: String,
}

/// One page of the menu listing, with the page link window alongside.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuPageResponse {
    pub menu_list: Vec<MenuResponse>,

    #[serde(flatten)]
    pub window: PageWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regist_request_valid() {
        let request = RegistMenuRequest {
            menu_name: "마늘벌꿀빙수".to_string(),
            menu_price: 12000,
            category_code: 10,
            orderable_status: "Y".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_regist_request_rejects_blank_name() {
        let request = RegistMenuRequest {
            menu_name: String::new(),
            menu_price: 12000,
            category_code: 10,
            orderable_status: "Y".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_regist_request_rejects_whitespace_only_name() {
        let request = RegistMenuRequest {
            menu_name: "   ".to_string(),
            menu_price: 12000,
            category_code: 10,
            orderable_status: "Y".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_regist_request_rejects_negative_price() {
        let request = RegistMenuRequest {
            menu_name: "마늘벌꿀빙수".to_string(),
            menu_price: -1,
            category_code: 10,
            orderable_status: "Y".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_regist_request_rejects_bad_flag() {
        let request = RegistMenuRequest {
            menu_name: "마늘벌꿀빙수".to_string(),
            menu_price: 12000,
            category_code: 10,
            orderable_status: "maybe".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_menu_response_serializes_camel_case() {
        let response = MenuResponse {
            menu_code: 7,
            menu_name: "우럭스무디".to_string(),
            menu_price: 5000,
            category_code: 9,
            orderable_status: "Y".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["menuCode"], 7);
        assert_eq!(json["menuName"], "우럭스무디");
        assert_eq!(json["menuPrice"], 5000);
        assert_eq!(json["categoryCode"], 9);
        assert_eq!(json["orderableStatus"], "Y");
    }
}
