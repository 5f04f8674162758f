//! 扫描快照分类：将 WiFi / BLE 两个通道的标识列表划分为三个互不相交的集合。

use domain::{ClassifiedSnapshot, DeviceId, ScanReport};
use std::collections::BTreeSet;

/// 对两个通道的标识列表分类。
///
/// - 重复标识按集合语义合并；
/// - `both` = WiFi ∩ BLE，`wifi_only` = WiFi − both，`ble_only` = BLE − both；
/// - 空串等异常标识原样透传，分类本身不会失败。
pub fn classify<A, B>(wifi_devices: A, ble_devices: B) -> ClassifiedSnapshot
where
    A: IntoIterator,
    A::Item: Into<DeviceId>,
    B: IntoIterator,
    B::Item: Into<DeviceId>,
{
    let wifi: BTreeSet<DeviceId> = wifi_devices.into_iter().map(Into::into).collect();
    let ble: BTreeSet<DeviceId> = ble_devices.into_iter().map(Into::into).collect();

    let both: BTreeSet<DeviceId> = wifi.intersection(&ble).cloned().collect();
    let wifi_only = wifi.difference(&both).cloned().collect();
    let ble_only = ble.difference(&both).cloned().collect();

    ClassifiedSnapshot {
        wifi_only,
        ble_only,
        both,
    }
}

/// 对一份原始扫描报告分类。
pub fn classify_report(report: &ScanReport) -> ClassifiedSnapshot {
    classify(
        report.wifi_devices.iter().cloned(),
        report.ble_devices.iter().cloned(),
    )
}
