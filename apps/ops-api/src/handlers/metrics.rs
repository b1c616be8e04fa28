//! Telemetry 指标快照
//!
//! - GET /metrics

use crate::AppState;
use crate::middleware::require_permission;
use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::permissions;
use ops_telemetry::metrics;

pub async fn get_metrics(State(state): State<AppState>) -> Response {
    if let Err(response) = require_permission(&state.operator, permissions::VIEW_REPORTS) {
        return response;
    }

    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            catalog_reads: snapshot.catalog_reads,
            catalog_writes: snapshot.catalog_writes,
            orders_priced: snapshot.orders_priced,
            timelines_rendered: snapshot.timelines_rendered,
            import_rows_validated: snapshot.import_rows_validated,
            import_rows_rejected: snapshot.import_rows_rejected,
            import_rows_committed: snapshot.import_rows_committed,
            import_rows_failed: snapshot.import_rows_failed,
        })),
    )
        .into_response()
}
