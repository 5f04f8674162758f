//! 请求上下文中间件
//!
//! 每个请求生成 request_id / trace_id，进入 `http_request` span，
//! 完成后补记状态码与耗时，并通过 `x-request-id` / `x-trace-id` 响应头回传。
//! 看板每隔数秒轮询一次，GET 请求的完成日志降为 debug。

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, Request},
    middleware::Next,
    response::Response,
};
use presence_telemetry::{RequestIds, new_request_ids};
use std::time::Instant;
use tracing::{Instrument, Span, debug, field, info};

pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let span = tracing::info_span!(
        target: "presence.http",
        "http_request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %req.uri().path(),
        status = field::Empty,
        latency_ms = field::Empty,
    );
    req.extensions_mut().insert(ids.clone());

    let started_at = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;
    let latency_ms = started_at.elapsed().as_millis() as u64;
    log_completion(&span, &method, response.status().as_u16(), latency_ms);

    attach_ids(response.headers_mut(), &ids);
    response
}

fn log_completion(span: &Span, method: &Method, status: u16, latency_ms: u64) {
    span.record("status", status);
    span.record("latency_ms", latency_ms);
    let _entered = span.enter();
    if *method == Method::GET && status < 400 {
        debug!(target: "presence.http", status, latency_ms, "request_completed");
    } else {
        info!(target: "presence.http", status, latency_ms, "request_completed");
    }
}

fn attach_ids(headers: &mut HeaderMap, ids: &RequestIds) {
    for (name, value) in [("x-request-id", &ids.request_id), ("x-trace-id", &ids.trace_id)] {
        if let Ok(value) = HeaderValue::from_str(value) {
            headers.insert(name, value);
        }
    }
}
