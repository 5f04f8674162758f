use domain::{ClassifiedSnapshot, ConnectionType, PresenceStatus};
use presence_classify::classify;
use presence_storage::{InMemoryPresenceStore, PresenceStore};
use std::sync::Arc;

fn empty() -> Vec<String> {
    Vec::new()
}

#[tokio::test]
async fn ingest_creates_online_records() {
    let store = InMemoryPresenceStore::new();

    let summary = store
        .ingest(classify(["AA"], ["AA", "BB"]), 1_000)
        .await
        .expect("ingest");
    assert_eq!(summary.created, 2);
    assert_eq!(summary.updated, 0);

    let view = store.current_view().await.expect("view");
    assert!(view.snapshot.both.contains("AA"));
    assert!(view.snapshot.ble_only.contains("BB"));
    assert!(view.snapshot.wifi_only.is_empty());

    let aa = view.history.get("AA").expect("AA");
    assert_eq!(aa.connection_type, ConnectionType::Both);
    assert_eq!(aa.status, PresenceStatus::Online);
    assert_eq!(aa.first_seen_ms, 1_000);
    assert_eq!(aa.last_seen_ms, 1_000);
    assert_eq!(aa.total_active_time_ms, 0);

    let bb = view.history.get("BB").expect("BB");
    assert_eq!(bb.connection_type, ConnectionType::Ble);
    assert_eq!(bb.status, PresenceStatus::Online);
}

#[tokio::test]
async fn reingest_accrues_active_time_and_switches_channel() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["CC"], empty()), 0)
        .await
        .expect("ingest wifi");
    let summary = store
        .ingest(classify(empty(), ["CC"]), 10_000)
        .await
        .expect("ingest ble");
    assert_eq!(summary.updated, 1);

    let record = store.get_record("CC").await.expect("get").expect("CC");
    assert_eq!(record.total_active_time_ms, 10_000);
    assert_eq!(record.connection_type, ConnectionType::Ble);
    assert_eq!(record.first_seen_ms, 0);
    assert_eq!(record.last_seen_ms, 10_000);
}

#[tokio::test]
async fn empty_ingest_replaces_snapshot_but_keeps_history() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["AA", "DD"], ["AA", "BB"]), 1_000)
        .await
        .expect("ingest");
    let before = store.current_view().await.expect("view").history;

    let summary = store
        .ingest(ClassifiedSnapshot::default(), 5_000)
        .await
        .expect("empty ingest");
    assert_eq!(summary.created + summary.updated, 0);

    let view = store.current_view().await.expect("view");
    assert!(view.snapshot.is_empty());
    assert_eq!(view.history, before);
}

#[tokio::test]
async fn snapshot_is_replaced_not_merged() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["AA"], empty()), 1_000)
        .await
        .expect("first");
    store
        .ingest(classify(empty(), ["BB"]), 2_000)
        .await
        .expect("second");

    let view = store.current_view().await.expect("view");
    assert!(view.snapshot.wifi_only.is_empty());
    assert!(view.snapshot.ble_only.contains("BB"));
    assert_eq!(view.history.len(), 2);
}

#[tokio::test]
async fn sweep_respects_threshold() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["AA"], empty()), 1_000)
        .await
        .expect("ingest");

    let marked = store.sweep_offline(1_000 + 29_999).await.expect("sweep");
    assert!(marked.is_empty());
    let record = store.get_record("AA").await.expect("get").expect("AA");
    assert_eq!(record.status, PresenceStatus::Online);

    let marked = store.sweep_offline(1_000 + 30_001).await.expect("sweep");
    assert_eq!(marked, vec!["AA".to_string()]);
    let record = store.get_record("AA").await.expect("get").expect("AA");
    assert_eq!(record.status, PresenceStatus::Offline);
    assert_eq!(record.last_seen_ms, 1_000);
    assert_eq!(record.connection_type, ConnectionType::Wifi);
    assert_eq!(record.total_active_time_ms, 0);
}

#[tokio::test]
async fn sweep_is_idempotent() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["AA"], empty()), 0)
        .await
        .expect("ingest");

    assert_eq!(store.sweep_offline(40_000).await.expect("sweep").len(), 1);
    assert!(store.sweep_offline(45_000).await.expect("sweep").is_empty());
    let record = store.get_record("AA").await.expect("get").expect("AA");
    assert_eq!(record.status, PresenceStatus::Offline);
}

#[tokio::test]
async fn offline_record_revives_on_ingest() {
    let store = InMemoryPresenceStore::new();
    store
        .ingest(classify(["AA"], empty()), 0)
        .await
        .expect("ingest");
    store.sweep_offline(60_000).await.expect("sweep");

    store
        .ingest(classify(["AA"], ["AA"]), 90_000)
        .await
        .expect("reingest");
    let record = store.get_record("AA").await.expect("get").expect("AA");
    assert_eq!(record.status, PresenceStatus::Online);
    assert_eq!(record.connection_type, ConnectionType::Both);
    // 离线区间同样计入累计时长
    assert_eq!(record.total_active_time_ms, 90_000);
}

#[tokio::test]
async fn custom_threshold() {
    let store = InMemoryPresenceStore::with_offline_after_ms(5_000);
    assert_eq!(store.offline_after_ms(), 5_000);
    store
        .ingest(classify(["AA"], empty()), 0)
        .await
        .expect("ingest");
    assert!(store.sweep_offline(5_000).await.expect("sweep").is_empty());
    assert_eq!(store.sweep_offline(5_001).await.expect("sweep").len(), 1);
}

#[tokio::test]
async fn history_never_shrinks() {
    let store = InMemoryPresenceStore::new();
    let steps: Vec<(Vec<&str>, Vec<&str>, i64)> = vec![
        (vec!["A", "B"], vec![], 0),
        (vec![], vec!["C"], 10_000),
        (vec![], vec![], 50_000),
        (vec!["A"], vec!["A", "D"], 90_000),
        (vec![], vec![], 200_000),
    ];

    let mut previous = 0;
    for (wifi, ble, now_ms) in steps {
        store
            .ingest(classify(wifi, ble), now_ms)
            .await
            .expect("ingest");
        store.sweep_offline(now_ms).await.expect("sweep");
        let view = store.current_view().await.expect("view");
        assert!(view.history.len() >= previous);
        for record in view.history.values() {
            assert!(record.first_seen_ms <= record.last_seen_ms);
        }
        for (device_id, _) in view.snapshot.entries() {
            let record = view.history.get(device_id).expect("record");
            assert_eq!(record.status, PresenceStatus::Online);
            assert_eq!(record.last_seen_ms, now_ms);
        }
        previous = view.history.len();
    }
    assert_eq!(previous, 4);
}

#[tokio::test]
async fn get_record_missing() {
    let store = InMemoryPresenceStore::new();
    assert!(store.get_record("ZZ").await.expect("get").is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_ingest_and_view() {
    let store = Arc::new(InMemoryPresenceStore::new());
    let mut handles = Vec::new();
    for i in 0..16i64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let id = format!("DEV-{}", i % 4);
            store
                .ingest(classify([id.clone()], [id]), 1_000 + i)
                .await
                .expect("ingest");
            let view = store.current_view().await.expect("view");
            for record in view.history.values() {
                assert!(record.first_seen_ms <= record.last_seen_ms);
            }
        }));
    }
    for handle in handles {
        handle.await.expect("join");
    }

    let view = store.current_view().await.expect("view");
    assert_eq!(view.history.len(), 4);
    for record in view.history.values() {
        assert_eq!(record.connection_type, ConnectionType::Both);
        assert_eq!(
            record.total_active_time_ms,
            record.last_seen_ms - record.first_seen_ms
        );
    }
}

#[tokio::test]
async fn extreme_timestamps_keep_store_usable() {
    let store = Arc::new(InMemoryPresenceStore::new());
    store
        .ingest(classify(["AA"], empty()), -1)
        .await
        .expect("ingest at -1");

    let task_store = store.clone();
    tokio::spawn(async move {
        task_store
            .ingest(classify(["AA"], empty()), i64::MAX)
            .await
            .expect("ingest at max");
    })
    .await
    .expect("ingest task must not panic");

    let view = store.current_view().await.expect("view after extreme ingest");
    let record = view.history.get("AA").expect("AA");
    assert_eq!(record.last_seen_ms, i64::MAX);
    assert_eq!(record.total_active_time_ms, i64::MAX);
    assert_eq!(record.status, PresenceStatus::Online);

    assert!(store.sweep_offline(i64::MIN).await.expect("sweep").is_empty());
    store
        .ingest(classify(empty(), ["BB"]), i64::MIN)
        .await
        .expect("ingest at min");
    assert_eq!(store.current_view().await.expect("view").history.len(), 2);
}
