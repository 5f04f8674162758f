//! Telemetry 指标快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use presence_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            reports_received: snapshot.reports_received,
            identifiers_ingested: snapshot.identifiers_ingested,
            records_created: snapshot.records_created,
            sweeps: snapshot.sweeps,
            records_marked_offline: snapshot.records_marked_offline,
            store_failures: snapshot.store_failures,
        })),
    )
        .into_response()
}
