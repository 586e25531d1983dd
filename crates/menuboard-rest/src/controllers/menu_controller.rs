//! Menu catalog controller.

use crate::{
    extractors::PaginationQuery,
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use menuboard_service::dto::{MenuPageResponse, MenuResponse, ModifyMenuRequest, RegistMenuRequest};
use menuboard_service::{dto::CategoryResponse, MenuSearch};
use serde::Deserialize;
use tracing::debug;

/// Creates the menu router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list_menus))
        .route("/categories", get(list_categories))
        .route("/search", get(search_menus))
        .route("/regist", post(regist_menu))
        .route("/modify", get(modify_menu_form).post(modify_menu))
        .route("/remove", get(remove_menu))
        .route("/:code", get(get_menu))
}

/// Query holding a menu code.
#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    pub code: i32,
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "type", default)]
    pub search_type: String,
    #[serde(default)]
    pub query: String,
}

/// One page of the catalog listing.
#[utoipa::path(
    get,
    path = "/menu/list",
    tag = "menu",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("size" = Option<usize>, Query, description = "Items per page"),
        ("sort" = Option<String>, Query, description = "Sort expression, e.g. menuPrice,desc")
    ),
    responses(
        (status = 200, description = "One page of menus with the page link window", body = MenuPageResponse),
        (status = 400, description = "Unknown sort field")
    )
)]
pub async fn list_menus(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<MenuPageResponse> {
    debug!("List menus request");

    let sort = pagination.sort()?;
    let response = state
        .menu_service
        .find_menu_list(pagination.page_request(), sort)
        .await?;
    ok(response)
}

/// Selectable sub-categories.
#[utoipa::path(
    get,
    path = "/menu/categories",
    tag = "menu",
    responses(
        (status = 200, description = "Sub-categories, newest first", body = [CategoryResponse])
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<CategoryResponse>> {
    debug!("List categories request");

    let response = state.menu_service.find_sub_categories().await?;
    ok(response)
}

/// Search the catalog by price, name, or both.
#[utoipa::path(
    get,
    path = "/menu/search",
    tag = "menu",
    params(
        ("type" = String, Query, description = "Criterion: price, name, or both"),
        ("query" = String, Query, description = "Search text; 'both' expects price,name")
    ),
    responses(
        (status = 200, description = "Matching menus; an unrecognized type yields an empty list", body = [MenuResponse]),
        (status = 400, description = "Malformed price text")
    )
)]
pub async fn search_menus(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<MenuResponse>> {
    debug!("Search menus request: type={}", query.search_type);

    let response = match MenuSearch::from_query(&query.search_type, &query.query)? {
        Some(search) => state.menu_service.search_menus(search).await?,
        None => Vec::new(),
    };
    ok(response)
}

/// A single menu by its code.
#[utoipa::path(
    get,
    path = "/menu/{code}",
    tag = "menu",
    params(
        ("code" = i32, Path, description = "Menu code")
    ),
    responses(
        (status = 200, description = "The menu", body = MenuResponse),
        (status = 404, description = "No menu with that code")
    )
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> ApiResult<MenuResponse> {
    debug!("Get menu request: {}", code);

    let response = state.menu_service.find_menu_by_code(code).await?;
    ok(response)
}

/// The current state of a menu, for prefilling the edit form.
#[utoipa::path(
    get,
    path = "/menu/modify",
    tag = "menu",
    params(
        ("code" = i32, Query, description = "Menu code")
    ),
    responses(
        (status = 200, description = "The menu to edit", body = MenuResponse),
        (status = 404, description = "No menu with that code")
    )
)]
pub async fn modify_menu_form(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> ApiResult<MenuResponse> {
    debug!("Modify menu form request: {}", query.code);

    let response = state.menu_service.find_menu_by_code(query.code).await?;
    ok(response)
}

/// Registers a new menu and redirects to the listing.
#[utoipa::path(
    post,
    path = "/menu/regist",
    tag = "menu",
    request_body(content = RegistMenuRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the catalog listing"),
        (status = 400, description = "Invalid menu fields")
    )
)]
pub async fn regist_menu(
    State(state): State<AppState>,
    Form(request): Form<RegistMenuRequest>,
) -> Result<Redirect, AppError> {
    debug!("Regist menu request: {}", request.menu_name);

    state.menu_service.register_menu(request).await?;
    Ok(Redirect::to("/menu/list"))
}

/// Overwrites a menu and redirects to its detail view.
#[utoipa::path(
    post,
    path = "/menu/modify",
    tag = "menu",
    request_body(content = ModifyMenuRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the modified menu"),
        (status = 400, description = "Invalid menu fields"),
        (status = 404, description = "No menu with that code")
    )
)]
pub async fn modify_menu(
    State(state): State<AppState>,
    Form(request): Form<ModifyMenuRequest>,
) -> Result<Redirect, AppError> {
    debug!("Modify menu request: {}", request.menu_code);

    let modified = state.menu_service.modify_menu(request).await?;
    Ok(Redirect::to(&format!("/menu/{}", modified.menu_code)))
}

/// Removes a menu and redirects to the root.
#[utoipa::path(
    get,
    path = "/menu/remove",
    tag = "menu",
    params(
        ("code" = i32, Query, description = "Menu code")
    ),
    responses(
        (status = 303, description = "Redirect to the root"),
        (status = 404, description = "No menu with that code")
    )
)]
pub async fn remove_menu(
    State(state): State<AppState>,
    Query(query): Query<CodeQuery>,
) -> Result<Redirect, AppError> {
    debug!("Remove menu request: {}", query.code);

    state.menu_service.remove_menu(query.code).await?;
    Ok(Redirect::to("/"))
}
