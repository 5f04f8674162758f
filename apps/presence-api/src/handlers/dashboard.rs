//! 看板查询 handlers
//!
//! - GET /dashboard - 最新分类快照 + 全部设备历史
//! - GET /history/{device_id} - 单个设备的历史记录

use crate::AppState;
use crate::utils::response::{not_found_error, record_to_dto, storage_error, view_to_dashboard};
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use presence_telemetry::record_store_failure;
use tracing::warn;

#[derive(serde::Deserialize)]
pub struct DevicePath {
    device_id: String,
}

/// 看板轮询接口，返回不带 `ApiResponse` 封装的 `DashboardDto`
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    match state.store.current_view().await {
        Ok(view) => (StatusCode::OK, Json(view_to_dashboard(view))).into_response(),
        Err(err) => {
            record_store_failure();
            warn!(error = %err, "dashboard_view_failed");
            storage_error(err)
        }
    }
}

pub async fn get_history(State(state): State<AppState>, Path(path): Path<DevicePath>) -> Response {
    match state.store.get_record(&path.device_id).await {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(ApiResponse::success(record_to_dto(record)))).into_response()
        }
        Ok(None) => not_found_error(),
        Err(err) => {
            record_store_failure();
            storage_error(err)
        }
    }
}
