use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::domain::{
    CompatibilityRequest, CompatibilityView, ExplainQuery, NamedCompatibilityRequest,
};
use super::service::NutritionService;
use super::suggestions::SuggestionProfile;
use crate::error::AppError;

/// Router builder exposing the catalog, compatibility, and suggestion
/// endpoints.
pub fn nutrition_router(service: Arc<NutritionService>) -> Router {
    Router::new()
        .route("/api/v1/foods", get(foods_handler))
        .route("/api/v1/compatibility", post(compatibility_handler))
        .route(
            "/api/v1/compatibility/by-name",
            post(named_compatibility_handler),
        )
        .route("/api/v1/suggestions", post(suggestions_handler))
        .with_state(service)
}

pub(crate) async fn foods_handler(State(service): State<Arc<NutritionService>>) -> Response {
    (StatusCode::OK, Json(service.foods())).into_response()
}

pub(crate) async fn compatibility_handler(
    State(service): State<Arc<NutritionService>>,
    Query(query): Query<ExplainQuery>,
    Json(request): Json<CompatibilityRequest>,
) -> Response {
    match service.assess_by_id(&request) {
        Ok(assessment) => {
            let view = CompatibilityView::from_assessment(assessment, query.explain);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn named_compatibility_handler(
    State(service): State<Arc<NutritionService>>,
    Query(query): Query<ExplainQuery>,
    Json(request): Json<NamedCompatibilityRequest>,
) -> Response {
    let assessment = service.assess_by_name(&request);
    let view = CompatibilityView::from_assessment(assessment, query.explain);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn suggestions_handler(
    State(service): State<Arc<NutritionService>>,
    Json(profile): Json<SuggestionProfile>,
) -> Response {
    (StatusCode::OK, Json(service.suggest(&profile))).into_response()
}
