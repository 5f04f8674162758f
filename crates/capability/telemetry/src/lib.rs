//! 追踪、请求 ID 生成与进程内计数指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub reports_received: u64,
    pub identifiers_ingested: u64,
    pub records_created: u64,
    pub sweeps: u64,
    pub records_marked_offline: u64,
    pub store_failures: u64,
}

/// 进程内计数指标。
pub struct TelemetryMetrics {
    reports_received: AtomicU64,
    identifiers_ingested: AtomicU64,
    records_created: AtomicU64,
    sweeps: AtomicU64,
    records_marked_offline: AtomicU64,
    store_failures: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            reports_received: AtomicU64::new(0),
            identifiers_ingested: AtomicU64::new(0),
            records_created: AtomicU64::new(0),
            sweeps: AtomicU64::new(0),
            records_marked_offline: AtomicU64::new(0),
            store_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reports_received: self.reports_received.load(Ordering::Relaxed),
            identifiers_ingested: self.identifiers_ingested.load(Ordering::Relaxed),
            records_created: self.records_created.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            records_marked_offline: self.records_marked_offline.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录收到的扫描报告次数。
pub fn record_report_received() {
    metrics().reports_received.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次 ingest 处理的标识数量与其中新建记录数量。
pub fn record_ingest(identifiers: u64, created: u64) {
    let metrics = metrics();
    metrics
        .identifiers_ingested
        .fetch_add(identifiers, Ordering::Relaxed);
    metrics
        .records_created
        .fetch_add(created, Ordering::Relaxed);
}

/// 记录一次离线巡检及其降级的记录数。
pub fn record_sweep(marked_offline: u64) {
    let metrics = metrics();
    metrics.sweeps.fetch_add(1, Ordering::Relaxed);
    metrics
        .records_marked_offline
        .fetch_add(marked_offline, Ordering::Relaxed);
}

/// 记录存储访问失败次数。
pub fn record_store_failure() {
    metrics().store_failures.fetch_add(1, Ordering::Relaxed);
}
