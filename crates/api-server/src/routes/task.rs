//! Task results API endpoints

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, error};

use a11y_core::query::FilterSpec;
use a11y_core::result::ResultView;
use a11y_core::Error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: Error) -> ApiError {
    let status = match &err {
        Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            error!("Results lookup failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = match err {
        Error::TaskNotFound(_) => "Not Found".to_string(),
        other => other.to_string(),
    };

    (status, Json(ErrorResponse { error: message }))
}

/// GET /api/tasks/:id/results - Results of a task, oldest first
///
/// Query parameters are validated before the task is looked up. An id
/// segment that cannot be decoded is treated like any other unknown id.
async fn get_task_results(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ResultView>>, ApiError> {
    let filter = FilterSpec::from_pairs(params).map_err(error_response)?;

    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!("Undecodable task id: {}", rejection.body_text());
            return Err(error_response(Error::TaskNotFound(rejection.body_text())));
        }
    };

    let results = state
        .engine()
        .get_results_for_task(&id, &filter)
        .await
        .map_err(error_response)?;

    Ok(Json(results))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/tasks/{id}/results", get(get_task_results))
}
