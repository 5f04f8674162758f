//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, not_found_error, storage_error
//! - DTO 转换：record_to_dto, view_to_dashboard
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应

use api_contract::{ApiResponse, DashboardDto, HistoryRecordDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{HistoryRecord, PresenceView};
use presence_storage::StorageError;
use std::collections::BTreeSet;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// HistoryRecord 转 HistoryRecordDto
pub fn record_to_dto(record: HistoryRecord) -> HistoryRecordDto {
    HistoryRecordDto {
        first_seen: record.first_seen_ms,
        last_seen: record.last_seen_ms,
        connection_type: record.connection_type.as_str().to_string(),
        total_active_time: record.total_active_time_ms,
        status: record.status.as_str().to_string(),
    }
}

/// PresenceView 转 DashboardDto
pub fn view_to_dashboard(view: PresenceView) -> DashboardDto {
    let device_count = view.snapshot.len();
    DashboardDto {
        wifi_only: sorted(view.snapshot.wifi_only),
        ble_only: sorted(view.snapshot.ble_only),
        both_devices: sorted(view.snapshot.both),
        device_count,
        history: view
            .history
            .into_iter()
            .map(|(device_id, record)| (device_id, record_to_dto(record)))
            .collect(),
    }
}

fn sorted(set: BTreeSet<String>) -> Vec<String> {
    set.into_iter().collect()
}
