use permgrid_matrix::{ingest_snapshot, ingest_snapshot_for, IngestOptions, MatrixState, SnapshotRecord};
use permgrid_types::{Effect, PermissionCatalog, Resource};
use pretty_assertions::assert_eq;

#[test]
fn explicit_effects_are_kept() {
    let records = vec![
        SnapshotRecord::new("menu.a", ["VIEW", "EDIT"], Some(Effect::Allow)),
        SnapshotRecord::new("menu.a", ["DELETE"], Some(Effect::Deny)),
    ];
    let m = ingest_snapshot(&records, &IngestOptions::default());
    assert_eq!(m.get("menu.a", "VIEW"), Effect::Allow);
    assert_eq!(m.get("menu.a", "DELETE"), Effect::Deny);
    assert_eq!(m.cell_count(), 3);
}

#[test]
fn legacy_records_default_to_allow() {
    let records = vec![SnapshotRecord::new("menu.a", ["VIEW"], None)];
    let m = ingest_snapshot(&records, &IngestOptions::default());
    assert_eq!(m.get("menu.a", "VIEW"), Effect::Allow);
}

#[test]
fn legacy_default_is_configurable() {
    let records = vec![
        SnapshotRecord::new("menu.a", ["VIEW"], None),
        SnapshotRecord::new("menu.b", ["VIEW"], Some(Effect::Allow)),
    ];
    let deny = IngestOptions {
        legacy_default_effect: Effect::Deny,
    };
    assert_eq!(ingest_snapshot(&records, &deny).get("menu.a", "VIEW"), Effect::Deny);

    let ignore = IngestOptions {
        legacy_default_effect: Effect::Unset,
    };
    let m = ingest_snapshot(&records, &ignore);
    assert_eq!(m.get("menu.a", "VIEW"), Effect::Unset);
    assert_eq!(m.get("menu.b", "VIEW"), Effect::Allow);
    assert_eq!(m.resource_count(), 1);
}

#[test]
fn explicit_unset_records_store_nothing() {
    let records = vec![SnapshotRecord::new("menu.a", ["VIEW"], Some(Effect::Unset))];
    assert!(ingest_snapshot(&records, &IngestOptions::default()).is_empty());
}

#[test]
fn later_records_win() {
    let records = vec![
        SnapshotRecord::new("menu.a", ["VIEW"], Some(Effect::Allow)),
        SnapshotRecord::new("menu.a", ["VIEW"], Some(Effect::Deny)),
    ];
    let m = ingest_snapshot(&records, &IngestOptions::default());
    assert_eq!(m.get("menu.a", "VIEW"), Effect::Deny);
}

#[test]
fn default_applies_at_ingestion_only() {
    let records = vec![SnapshotRecord::new("menu.a", ["VIEW"], None)];
    let state = MatrixState::new(ingest_snapshot(&records, &IngestOptions::default()));
    // A cell nobody touched is Unset in both copies, not a defaulted Allow.
    assert_eq!(state.get("menu.a", "EDIT"), Effect::Unset);
    assert_eq!(state.change_count(), 0);
}

#[test]
fn records_deserialize_from_collaborator_json() {
    let json = r#"[
        {"resourceKey": "menu.a", "permissionCodes": ["VIEW", "EDIT"]},
        {"resourceKey": "menu.b", "permissionCodes": ["VIEW"], "effect": "DENY"},
        {"resourceKey": "menu.c"}
    ]"#;
    let records: Vec<SnapshotRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records[0].effect, None);
    assert!(records[2].permission_codes.is_empty());

    let m = ingest_snapshot(&records, &IngestOptions::default());
    assert_eq!(m.get("menu.a", "EDIT"), Effect::Allow);
    assert_eq!(m.get("menu.b", "VIEW"), Effect::Deny);
    assert_eq!(m.resource_count(), 2);
}

#[test]
fn checked_ingestion_drops_unknown_cells() {
    let tree = vec![Resource::menu("menu.a", "A").with_children(vec![Resource::component(
        "menu.a.btn",
        "Button",
    )])];
    let catalog = PermissionCatalog::from_values(["VIEW", "EDIT"]);
    let records = vec![
        SnapshotRecord::new("menu.a.btn", ["VIEW", "PURGE"], Some(Effect::Allow)),
        SnapshotRecord::new("menu.gone", ["VIEW"], None),
    ];
    let report = ingest_snapshot_for(&records, &IngestOptions::default(), &tree, &catalog);
    assert_eq!(report.matrix.cell_count(), 1);
    assert_eq!(report.matrix.get("menu.a.btn", "VIEW"), Effect::Allow);
    assert_eq!(
        report.dropped,
        vec![
            ("menu.a.btn".to_string(), "PURGE".to_string()),
            ("menu.gone".to_string(), "VIEW".to_string()),
        ]
    );
}

#[test]
fn ignored_legacy_record_keeps_explicit_effect() {
    let records = vec![
        SnapshotRecord::new("menu.a", ["VIEW"], Some(Effect::Deny)),
        SnapshotRecord::new("menu.a", ["VIEW", "EDIT"], None),
        SnapshotRecord::new("menu.b", ["VIEW"], Some(Effect::Allow)),
        SnapshotRecord::new("menu.b", ["VIEW"], None),
    ];
    let ignore = IngestOptions {
        legacy_default_effect: Effect::Unset,
    };
    let m = ingest_snapshot(&records, &ignore);
    assert_eq!(m.get("menu.a", "VIEW"), Effect::Deny);
    assert_eq!(m.get("menu.a", "EDIT"), Effect::Unset);
    assert_eq!(m.get("menu.b", "VIEW"), Effect::Allow);
    assert_eq!(m.cell_count(), 2);
}

#[test]
fn checked_ingestion_ignores_legacy_record_under_unset_default() {
    let tree = vec![Resource::menu("menu.a", "A")];
    let catalog = PermissionCatalog::from_values(["VIEW"]);
    let records = vec![
        SnapshotRecord::new("menu.a", ["VIEW"], Some(Effect::Deny)),
        SnapshotRecord::new("menu.a", ["VIEW"], None),
        SnapshotRecord::new("menu.gone", ["VIEW"], None),
    ];
    let ignore = IngestOptions {
        legacy_default_effect: Effect::Unset,
    };
    let report = ingest_snapshot_for(&records, &ignore, &tree, &catalog);
    assert_eq!(report.matrix.get("menu.a", "VIEW"), Effect::Deny);
    assert!(report.dropped.is_empty());
}
