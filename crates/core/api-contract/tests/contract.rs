use api_contract::{DashboardDto, HistoryRecordDto, ScanReportRequest};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn scan_report_reads_both_lists() {
    let request = ScanReportRequest::from_json_value(json!({
        "wifiDevices": ["AA", "BB"],
        "bleDevices": ["BB"]
    }));
    assert_eq!(request.wifi_devices, vec!["AA", "BB"]);
    assert_eq!(request.ble_devices, vec!["BB"]);
}

#[test]
fn scan_report_missing_lists_default_empty() {
    let request = ScanReportRequest::from_json_value(json!({ "wifiDevices": ["AA"] }));
    assert_eq!(request.wifi_devices, vec!["AA"]);
    assert!(request.ble_devices.is_empty());

    let request = ScanReportRequest::from_json_value(json!({}));
    assert!(request.wifi_devices.is_empty());
    assert!(request.ble_devices.is_empty());
}

#[test]
fn scan_report_wrong_shapes_default_empty() {
    let request = ScanReportRequest::from_json_value(json!({
        "wifiDevices": null,
        "bleDevices": "AA"
    }));
    assert!(request.wifi_devices.is_empty());
    assert!(request.ble_devices.is_empty());

    let request = ScanReportRequest::from_json_value(json!([["AA"], ["BB"]]));
    assert!(request.wifi_devices.is_empty());
    assert!(request.ble_devices.is_empty());

    let request = ScanReportRequest::from_json_value(json!("AA"));
    assert!(request.wifi_devices.is_empty());
}

#[test]
fn scan_report_non_string_entries_pass_through() {
    let request = ScanReportRequest::from_json_value(json!({
        "wifiDevices": ["", 12, true, { "mac": "AA" }]
    }));
    assert_eq!(
        request.wifi_devices,
        vec!["", "12", "true", r#"{"mac":"AA"}"#]
    );
}

#[test]
fn dashboard_uses_camel_case_keys() {
    let mut history = BTreeMap::new();
    history.insert(
        "AA".to_string(),
        HistoryRecordDto {
            first_seen: 0,
            last_seen: 10_000,
            connection_type: "Both".to_string(),
            total_active_time: 10_000,
            status: "Online".to_string(),
        },
    );
    let dto = DashboardDto {
        wifi_only: Vec::new(),
        ble_only: vec!["BB".to_string()],
        both_devices: vec!["AA".to_string()],
        device_count: 2,
        history,
    };

    let value = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(value["wifiOnly"], json!([]));
    assert_eq!(value["bleOnly"], json!(["BB"]));
    assert_eq!(value["bothDevices"], json!(["AA"]));
    assert_eq!(value["deviceCount"], json!(2));
    assert_eq!(value["history"]["AA"]["firstSeen"], json!(0));
    assert_eq!(value["history"]["AA"]["lastSeen"], json!(10_000));
    assert_eq!(value["history"]["AA"]["connectionType"], json!("Both"));
    assert_eq!(value["history"]["AA"]["totalActiveTime"], json!(10_000));
    assert_eq!(value["history"]["AA"]["status"], json!("Online"));
}
