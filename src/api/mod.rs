use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::error;

use crate::PlannerError;
use crate::models::{DailyOptionsRequest, Day, PlanRequest, TripPlan};
use crate::planner::TripPlanService;

type AppState = Arc<TripPlanService>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-facing wrapper around [`PlannerError`]
pub struct ApiError(PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            PlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
            PlannerError::Generation { .. } | PlannerError::InvalidOutput { .. } => {
                StatusCode::BAD_GATEWAY
            }
            PlannerError::Config { .. } | PlannerError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        let body = ErrorBody {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(service: Arc<TripPlanService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/plan/generate", post(generate_plan))
        .route("/v1/plan/options/day", post(generate_daily_options))
        .with_state(service)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn generate_plan(
    State(service): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<TripPlan>, ApiError> {
    let plan = service
        .generate_trip_plan(&request.prompt)
        .await?
        .ok_or_else(|| PlannerError::invalid_output("Model returned no plan"))?;
    Ok(Json(plan))
}

async fn generate_daily_options(
    State(service): State<AppState>,
    Json(request): Json<DailyOptionsRequest>,
) -> Result<Json<Vec<Day>>, ApiError> {
    let options = service.generate_daily_options(&request).await?;
    Ok(Json(options))
}
