pub mod data;
pub mod presence;

pub use data::ScanReport;
pub use presence::{
    ClassifiedSnapshot, ConnectionType, DeviceId, HistoryRecord, PresenceStatus, PresenceView,
};
