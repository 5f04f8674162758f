//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 传感器扫描上报请求体。
///
/// 两个列表均可缺省；缺省、`null` 或非数组一律按空列表处理，
/// 非字符串元素按其 JSON 文本原样透传。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReportRequest {
    #[serde(default, deserialize_with = "lenient_device_list")]
    pub wifi_devices: Vec<String>,
    #[serde(default, deserialize_with = "lenient_device_list")]
    pub ble_devices: Vec<String>,
}

impl ScanReportRequest {
    /// 从任意 JSON 值解析；顶层不是对象时视为空上报。
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn lenient_device_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(device_id) => device_id,
            other => other.to_string(),
        })
        .collect())
}

/// 上报确认。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestAckDto {
    pub message: String,
    pub wifi_only_count: usize,
    pub ble_only_count: usize,
    pub both_count: usize,
}

/// 单个设备的历史记录（时间戳为 epoch 毫秒，时长为毫秒）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordDto {
    pub first_seen: i64,
    pub last_seen: i64,
    pub connection_type: String,
    pub total_active_time: i64,
    pub status: String,
}

/// 看板轮询返回结构（不经 `ApiResponse` 封装，兼容现有看板页面）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub wifi_only: Vec<String>,
    pub ble_only: Vec<String>,
    pub both_devices: Vec<String>,
    pub device_count: usize,
    pub history: BTreeMap<String, HistoryRecordDto>,
}

/// 指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub reports_received: u64,
    pub identifiers_ingested: u64,
    pub records_created: u64,
    pub sweeps: u64,
    pub records_marked_offline: u64,
    pub store_failures: u64,
}
