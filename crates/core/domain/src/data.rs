use crate::presence::DeviceId;

/// 传感器上报的原始扫描报告。
///
/// 两个通道的标识列表原样保留（可能包含重复项），缺省列表以空列表表示。
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub wifi_devices: Vec<DeviceId>,
    pub ble_devices: Vec<DeviceId>,
    pub received_at_ms: i64,
}

impl ScanReport {
    pub fn new(wifi_devices: Vec<DeviceId>, ble_devices: Vec<DeviceId>, received_at_ms: i64) -> Self {
        Self {
            wifi_devices,
            ble_devices,
            received_at_ms,
        }
    }
}
