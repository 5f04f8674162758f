//! 在线状态领域模型。

use std::collections::{BTreeMap, BTreeSet};

/// 设备标识（通道硬件地址），按原始字节精确比较，不做大小写归一。
pub type DeviceId = String;

/// 设备最近一次被观测到的连接方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Wifi,
    Ble,
    Both,
    Unknown,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "WiFi",
            ConnectionType::Ble => "BLE",
            ConnectionType::Both => "Both",
            ConnectionType::Unknown => "Unknown",
        }
    }
}

/// 设备在线状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceStatus {
    Online,
    Offline,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "Online",
            PresenceStatus::Offline => "Offline",
        }
    }
}

/// 一次扫描的分类结果，三个集合两两不相交。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedSnapshot {
    pub wifi_only: BTreeSet<DeviceId>,
    pub ble_only: BTreeSet<DeviceId>,
    pub both: BTreeSet<DeviceId>,
}

impl ClassifiedSnapshot {
    /// 遍历快照内全部标识及其连接方式。
    pub fn entries(&self) -> impl Iterator<Item = (&DeviceId, ConnectionType)> {
        self.wifi_only
            .iter()
            .map(|id| (id, ConnectionType::Wifi))
            .chain(self.ble_only.iter().map(|id| (id, ConnectionType::Ble)))
            .chain(self.both.iter().map(|id| (id, ConnectionType::Both)))
    }

    pub fn len(&self) -> usize {
        self.wifi_only.len() + self.ble_only.len() + self.both.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 单个设备的累计历史记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub first_seen_ms: i64,
    pub last_seen_ms: i64,
    pub connection_type: ConnectionType,
    /// 相邻两次观测的时间间隔之和（毫秒），不扣除离线区间。
    pub total_active_time_ms: i64,
    pub status: PresenceStatus,
}

impl HistoryRecord {
    /// 首次观测创建的记录。
    pub fn new(connection_type: ConnectionType, now_ms: i64) -> Self {
        Self {
            first_seen_ms: now_ms,
            last_seen_ms: now_ms,
            connection_type,
            total_active_time_ms: 0,
            status: PresenceStatus::Online,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == PresenceStatus::Online
    }
}

/// 看板读取的只读视图：最新快照 + 全部历史记录。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceView {
    pub snapshot: ClassifiedSnapshot,
    pub history: BTreeMap<DeviceId, HistoryRecord>,
}
