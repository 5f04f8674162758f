//! 扫描上报接收与在线状态看板 HTTP 服务。

mod handlers;
mod middleware;
mod routes;
mod sweeper;
mod utils;

use presence_config::AppConfig;
use presence_storage::{InMemoryPresenceStore, PresenceStore};
use presence_telemetry::init_tracing;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PresenceStore>,
    pub log_payloads: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 进程内唯一的在线状态存储，随进程退出而释放
    let store: Arc<dyn PresenceStore> = Arc::new(InMemoryPresenceStore::with_offline_after_ms(
        config.offline_after_ms,
    ));
    let _sweeper = sweeper::spawn_sweeper(store.clone(), config.sweep_interval_ms);

    let state = AppState {
        store,
        log_payloads: config.log_payloads,
    };
    let app = routes::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(
        http_addr = %config.http_addr,
        offline_after_ms = config.offline_after_ms,
        sweep_interval_ms = config.sweep_interval_ms,
        "server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
