//! 离线巡检任务
//!
//! 按固定周期调用 `PresenceStore::sweep_offline`，把超过离线阈值未再上报的设备标记为离线。
//! 巡检在单个任务内串行执行，上一轮结束前不会开始下一轮。

use crate::utils::now_epoch_ms;
use presence_storage::PresenceStore;
use presence_telemetry::{record_store_failure, record_sweep};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// 启动离线巡检后台任务
///
/// # 参数
/// - `store`: 在线状态存储
/// - `interval_ms`: 巡检周期（毫秒）
pub fn spawn_sweeper(
    store: Arc<dyn PresenceStore>,
    interval_ms: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval 的第一次 tick 立即完成，跳过它以保证首轮巡检发生在一个周期之后
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweep_once(store.as_ref(), now_epoch_ms()).await;
        }
    })
}

/// 执行一轮巡检，返回本轮被标记为离线的设备数
pub async fn sweep_once(store: &dyn PresenceStore, now_ms: i64) -> usize {
    match store.sweep_offline(now_ms).await {
        Ok(marked) => {
            record_sweep(marked.len() as u64);
            if marked.is_empty() {
                debug!(target: "presence.sweep", now_ms = now_ms, "sweep_noop");
            } else {
                info!(
                    target: "presence.sweep",
                    now_ms = now_ms,
                    marked_offline = marked.len(),
                    devices = ?marked,
                    "devices_marked_offline"
                );
            }
            marked.len()
        }
        Err(err) => {
            record_store_failure();
            warn!(target: "presence.sweep", error = %err, "sweep_failed");
            0
        }
    }
}
