//! Purpose: Shared snapshot JSON serializers for management transports.
//! Exports: `snapshot_json` and `snapshots_json`.
//! Role: Keep the window-pool payload shape consistent across entry points.
//! Invariants: Stable key names for v0 snapshot payloads; fields are additive-only.
//! Invariants: The pool array preserves reporter output order.

use serde_json::{Map, Value, json};

use crate::core::snapshot::WindowPoolSnapshot;

pub fn snapshot_json(snapshot: &WindowPoolSnapshot) -> Value {
    let mut map = Map::new();
    map.insert("name".to_string(), json!(snapshot.name));
    map.insert(
        "available_memory".to_string(),
        json!(snapshot.available_memory),
    );
    map.insert("used_memory".to_string(), json!(snapshot.used_memory));
    map.insert("window_count".to_string(), json!(snapshot.window_count));
    map.insert("window_size".to_string(), json!(snapshot.window_size));
    map.insert("hit_count".to_string(), json!(snapshot.hit_count));
    map.insert("miss_count".to_string(), json!(snapshot.miss_count));
    map.insert("oom_count".to_string(), json!(snapshot.oom_count));
    Value::Object(map)
}

pub fn snapshots_json(snapshots: &[WindowPoolSnapshot]) -> Value {
    let pools: Vec<Value> = snapshots.iter().map(snapshot_json).collect();
    json!({ "window_pools": pools })
}
