use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::get_updates))
        .routes(routes!(handlers::send_message))
        .routes(routes!(handlers::get_me))
        .routes(routes!(handlers::set_webhook))
        .with_state(state)
        .split_for_parts();

    let api_json = api.clone();
    let router = router.route(
        "/api/openapi.json",
        get(move || async move { Json(api_json) }),
    );

    (router, api)
}
