use chrono::TimeZone;
use chrono::Utc;
use fwkit_lib::{
    export_filename, read_policy_csv, FwkitError, ReviewConfig, ReviewStore, RuleClassifier,
};

const POLICY_CSV: &str = "\
Type,Name,Source,Destination,Hits,Services & Applications
Section,,DMZ Rules,nan,nan,nan
Allow,web-in,Any,10.0.0.1,Zero,HTTP;SSH
Allow [Disabled],old-rule,192.168.1.0,192.168.2.0,15,SSH
Allow,\"app, internal\",10.1.0.0,10.2.0.0,1204,HTTPS
";

#[test]
fn test_review_and_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, POLICY_CSV).unwrap();

    let table = read_policy_csv(&path).unwrap();
    assert_eq!(table.len(), 4);

    let classifier = RuleClassifier::new(&ReviewConfig::default());
    let mut store = ReviewStore::new();
    let session_id = store.insert(classifier.classify_table(&table));

    let csv = store.export_csv(session_id).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Type,Name,Source,Destination,Hits,Services & Applications,Categories"
    );
    // Section rows keep Name/Type, everything else is blanked.
    assert_eq!(lines[1], "Section,,,,,,Section Header");
    assert_eq!(
        lines[2],
        "Allow,web-in,Any,10.0.0.1,Zero,HTTP;SSH,\
         \"Zero Hits, Any in Source/Destination, Weak Protocol\""
    );
    assert_eq!(
        lines[3],
        "Allow [Disabled],old-rule,192.168.1.0,192.168.2.0,15,SSH,Disabled"
    );
    assert_eq!(
        lines[4],
        "Allow,\"app, internal\",10.1.0.0,10.2.0.0,1204,HTTPS,Normal"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_exported_csv_reingests_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, POLICY_CSV).unwrap();

    let table = read_policy_csv(&path).unwrap();
    let classifier = RuleClassifier::new(&ReviewConfig::default());
    let mut store = ReviewStore::new();
    let session_id = store.insert(classifier.classify_table(&table));

    let reexport_path = dir.path().join("classified.csv");
    std::fs::write(&reexport_path, store.export_csv(session_id).unwrap()).unwrap();

    let reparsed = read_policy_csv(&reexport_path).unwrap();
    assert_eq!(reparsed.len(), 4);
    assert_eq!(
        reparsed.rows()[1].get("Categories"),
        "Zero Hits, Any in Source/Destination, Weak Protocol"
    );
    assert_eq!(reparsed.rows()[3].get("Name"), "app, internal");
}

#[test]
fn test_export_after_session_removed_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, POLICY_CSV).unwrap();

    let table = read_policy_csv(&path).unwrap();
    let classifier = RuleClassifier::new(&ReviewConfig::default());

    let mut store = ReviewStore::new();
    let session_id = store.insert(classifier.classify_table(&table));
    store.remove(session_id).unwrap();

    let err = store.export_csv(session_id).unwrap_err();
    assert!(matches!(err, FwkitError::NothingToExport));
}

#[test]
fn test_export_of_an_empty_classification_is_rejected() {
    let mut store = ReviewStore::new();
    let session_id = store.insert(Vec::new());

    let err = store.export_csv(session_id).unwrap_err();
    assert!(matches!(err, FwkitError::NothingToExport));
}

#[test]
fn test_sessions_do_not_overwrite_each_other() {
    let classifier = RuleClassifier::new(&ReviewConfig::default());
    let mut store = ReviewStore::new();

    let first = store.insert(classifier.classify_table(&fwkit_lib::Table::new(vec![
        fwkit_lib::Row::from_pairs([("Type", "Allow"), ("Name", "one")]),
    ])));
    let second = store.insert(classifier.classify_table(&fwkit_lib::Table::new(vec![
        fwkit_lib::Row::from_pairs([("Type", "Allow"), ("Name", "two")]),
    ])));

    assert_ne!(first, second);
    assert!(store.export_csv(first).unwrap().contains("one"));
    assert!(store.export_csv(second).unwrap().contains("two"));
}

#[test]
fn test_export_filename_format() {
    let stamp = Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 2).unwrap();
    assert_eq!(
        export_filename(stamp),
        "classified_rules_20250309_070502.csv"
    );
}
