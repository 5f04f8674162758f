//! 在线状态存储接口。

use crate::error::StorageError;
use domain::{ClassifiedSnapshot, DeviceId, HistoryRecord, PresenceView};

/// 默认离线阈值：距最后一次观测超过 30 秒即判定离线。
pub const DEFAULT_OFFLINE_AFTER_MS: i64 = 30_000;

/// 单次 ingest 的处理结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// 首次出现、新建历史记录的标识数。
    pub created: usize,
    /// 已有历史记录被刷新的标识数。
    pub updated: usize,
}

#[async_trait::async_trait]
pub trait PresenceStore: Send + Sync {
    /// 用新快照整体替换当前快照，并刷新快照内每个标识的历史记录。
    async fn ingest(
        &self,
        snapshot: ClassifiedSnapshot,
        now_ms: i64,
    ) -> Result<IngestSummary, StorageError>;

    /// 将超过离线阈值未再出现的记录标记为离线，返回本次被降级的标识。
    async fn sweep_offline(&self, now_ms: i64) -> Result<Vec<DeviceId>, StorageError>;

    /// 当前快照与全部历史记录的一致性视图。
    async fn current_view(&self) -> Result<PresenceView, StorageError>;

    async fn get_record(&self, device_id: &str) -> Result<Option<HistoryRecord>, StorageError>;
}
