//! OpenAPI documentation configuration.

use menuboard_core::{ErrorResponse, FieldError, PageWindow};
use menuboard_service::dto::{
    CategoryResponse, MenuPageResponse, MenuResponse, ModifyMenuRequest, RegistMenuRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Menuboard API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menuboard API",
        version = "1.0.0",
        description = "RESTful API for the Menuboard catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Menu endpoints
        crate::controllers::menu_controller::list_menus,
        crate::controllers::menu_controller::list_categories,
        crate::controllers::menu_controller::search_menus,
        crate::controllers::menu_controller::get_menu,
        crate::controllers::menu_controller::modify_menu_form,
        crate::controllers::menu_controller::regist_menu,
        crate::controllers::menu_controller::modify_menu,
        crate::controllers::menu_controller::remove_menu,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            PageWindow,
            RegistMenuRequest,
            ModifyMenuRequest,
            MenuResponse,
            MenuPageResponse,
            CategoryResponse,
        )
    ),
    tags(
        (name = "menu", description = "Menu catalog endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
