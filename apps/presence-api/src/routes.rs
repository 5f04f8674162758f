//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 扫描上报：POST /devices
//! - 看板轮询：GET /dashboard
//! - 单设备历史：GET /history/{device_id}
//! - 指标快照：GET /metrics

use super::AppState;
use super::handlers::*;
use crate::middleware::request_context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，由 [`create_app`] 同时挂载在 / 和 /api/ 两种前缀下
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/devices", post(ingest_report))
        .route("/dashboard", get(get_dashboard))
        .route("/history/:device_id", get(get_history))
        .route("/metrics", get(get_metrics))
}

/// 组装完整应用：路由、状态、请求上下文与跨域
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_api_router())
        .nest("/api", create_api_router())
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context))
        // 上报端与看板页面可能不同源，全部放行
        .layer(CorsLayer::permissive())
}
