//! 在线状态内存实现。
//!
//! 快照与历史记录由同一把 `RwLock` 保护：ingest / sweep 持写锁完成整个操作，
//! 读视图持读锁复制，读方不会看到更新到一半的记录。

use crate::error::StorageError;
use crate::presence::{DEFAULT_OFFLINE_AFTER_MS, IngestSummary, PresenceStore};
use domain::{
    ClassifiedSnapshot, ConnectionType, DeviceId, HistoryRecord, PresenceStatus, PresenceView,
};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::RwLock;

#[derive(Default)]
struct PresenceState {
    snapshot: ClassifiedSnapshot,
    // 只增不删：记录在进程生命周期内一直保留
    history: BTreeMap<DeviceId, HistoryRecord>,
}

pub struct InMemoryPresenceStore {
    offline_after_ms: i64,
    state: RwLock<PresenceState>,
}

impl InMemoryPresenceStore {
    pub fn new() -> Self {
        Self::with_offline_after_ms(DEFAULT_OFFLINE_AFTER_MS)
    }

    pub fn with_offline_after_ms(offline_after_ms: i64) -> Self {
        Self {
            offline_after_ms,
            state: RwLock::new(PresenceState::default()),
        }
    }

    pub fn offline_after_ms(&self) -> i64 {
        self.offline_after_ms
    }
}

impl Default for InMemoryPresenceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 再次观测到已有标识。
///
/// 累计时长增加的是与上一次观测的间隔，即使中间曾经离线也照常计入。
/// 时钟回拨时间隔按 0 计，`last_seen_ms` 不后退。
fn observe(record: &mut HistoryRecord, connection_type: ConnectionType, now_ms: i64) {
    let previous_last_seen_ms = record.last_seen_ms;
    let observed_at_ms = now_ms.max(previous_last_seen_ms);
    record.last_seen_ms = observed_at_ms;
    record.connection_type = connection_type;
    record.status = PresenceStatus::Online;
    record.total_active_time_ms = record
        .total_active_time_ms
        .saturating_add(observed_at_ms.saturating_sub(previous_last_seen_ms));
}

fn is_stale(record: &HistoryRecord, now_ms: i64, offline_after_ms: i64) -> bool {
    now_ms.saturating_sub(record.last_seen_ms) > offline_after_ms
}

#[async_trait::async_trait]
impl PresenceStore for InMemoryPresenceStore {
    async fn ingest(
        &self,
        snapshot: ClassifiedSnapshot,
        now_ms: i64,
    ) -> Result<IngestSummary, StorageError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StorageError::lock_poisoned("ingest"))?;
        let mut summary = IngestSummary::default();
        for (device_id, connection_type) in snapshot.entries() {
            match state.history.entry(device_id.clone()) {
                Entry::Occupied(mut entry) => {
                    observe(entry.get_mut(), connection_type, now_ms);
                    summary.updated += 1;
                }
                Entry::Vacant(entry) => {
                    entry.insert(HistoryRecord::new(connection_type, now_ms));
                    summary.created += 1;
                }
            }
        }
        state.snapshot = snapshot;
        Ok(summary)
    }

    async fn sweep_offline(&self, now_ms: i64) -> Result<Vec<DeviceId>, StorageError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StorageError::lock_poisoned("sweep_offline"))?;
        let mut marked = Vec::new();
        for (device_id, record) in state.history.iter_mut() {
            if record.is_online() && is_stale(record, now_ms, self.offline_after_ms) {
                record.status = PresenceStatus::Offline;
                marked.push(device_id.clone());
            }
        }
        Ok(marked)
    }

    async fn current_view(&self) -> Result<PresenceView, StorageError> {
        let state = self
            .state
            .read()
            .map_err(|_| StorageError::lock_poisoned("current_view"))?;
        Ok(PresenceView {
            snapshot: state.snapshot.clone(),
            history: state.history.clone(),
        })
    }

    async fn get_record(&self, device_id: &str) -> Result<Option<HistoryRecord>, StorageError> {
        let state = self
            .state
            .read()
            .map_err(|_| StorageError::lock_poisoned("get_record"))?;
        Ok(state.history.get(device_id).cloned())
    }
}
