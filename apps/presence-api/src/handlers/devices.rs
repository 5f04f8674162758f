//! 扫描上报 handlers
//!
//! - POST /devices - 接收传感器扫描报告，分类后写入在线状态存储
//!
//! 请求体宽松解析：缺省/错误形态的列表按空列表处理；
//! 只有请求体本身不是 JSON 时返回 400。

use crate::AppState;
use crate::utils::now_epoch_ms;
use crate::utils::response::{bad_request_error, storage_error};
use api_contract::{ApiResponse, IngestAckDto, ScanReportRequest};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ScanReport;
use presence_classify::classify_report;
use presence_telemetry::{record_ingest, record_report_received, record_store_failure};
use serde_json::Value;
use tracing::{info, warn};

/// 接收扫描报告
///
/// # 流程
///
/// 1. 解析请求体（空请求体视为空上报）
/// 2. 调用 `classify_report` 划分 WiFi / BLE / 双通道三个集合
/// 3. 调用 `store.ingest` 替换当前快照并刷新历史记录
/// 4. 返回三个集合的大小作为确认
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 请求体不是合法 JSON
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn ingest_report(State(state): State<AppState>, body: Bytes) -> Response {
    let value = match parse_body(&body) {
        Ok(value) => value,
        Err(message) => {
            warn!(target: "presence.ingest", error = %message, "scan_report_rejected");
            return bad_request_error(message);
        }
    };
    record_report_received();
    if state.log_payloads {
        info!(target: "presence.ingest", payload = %value, "scan_report_payload");
    }

    let request = ScanReportRequest::from_json_value(value);
    let report = ScanReport::new(request.wifi_devices, request.ble_devices, now_epoch_ms());
    let snapshot = classify_report(&report);
    let ack = IngestAckDto {
        message: "Data received successfully".to_string(),
        wifi_only_count: snapshot.wifi_only.len(),
        ble_only_count: snapshot.ble_only.len(),
        both_count: snapshot.both.len(),
    };

    match state.store.ingest(snapshot, report.received_at_ms).await {
        Ok(summary) => {
            record_ingest(
                (summary.created + summary.updated) as u64,
                summary.created as u64,
            );
            info!(
                target: "presence.ingest",
                received_at_ms = report.received_at_ms,
                wifi_only = ack.wifi_only_count,
                ble_only = ack.ble_only_count,
                both = ack.both_count,
                created = summary.created,
                updated = summary.updated,
                "scan_report_ingested"
            );
            (StatusCode::OK, Json(ApiResponse::success(ack))).into_response()
        }
        Err(err) => {
            record_store_failure();
            warn!(target: "presence.ingest", error = %err, "scan_report_ingest_failed");
            storage_error(err)
        }
    }
}

fn parse_body(body: &[u8]) -> Result<Value, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|err| format!("invalid json body: {err}"))
}
