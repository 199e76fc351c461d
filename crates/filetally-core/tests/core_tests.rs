use filetally_core::{
    AggregateBucket, AggregateKey, ContentMetric, NO_EXTENSION, Observation, PageRangeHistogram,
    ScanConfig,
};
use std::collections::HashMap;
use std::path::PathBuf;

#[test]
fn test_aggregate_key_identity() {
    let a = AggregateKey::new("pdf", 2019);
    let b = AggregateKey::new("pdf", 2019);
    let c = AggregateKey::new("pdf", 2020);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut map = HashMap::new();
    map.insert(a.clone(), 1);
    *map.entry(b).or_insert(0) += 1;
    assert_eq!(map.len(), 1);
    assert_eq!(map[&a], 2);
}

#[test]
fn test_aggregate_key_ordering() {
    let mut keys = vec![
        AggregateKey::new("xlsx", 2018),
        AggregateKey::new("doc", 2021),
        AggregateKey::new("doc", 2019),
    ];
    keys.sort();

    assert_eq!(keys[0], AggregateKey::new("doc", 2019));
    assert_eq!(keys[1], AggregateKey::new("doc", 2021));
    assert_eq!(keys[2], AggregateKey::new("xlsx", 2018));
}

#[test]
fn test_bucket_histogram_partition() {
    let mut bucket = AggregateBucket::new();
    for pages in [0, 1, 2, 3, 5, 6, 100, 0] {
        bucket.record(1, &ContentMetric::pages(pages));
    }

    assert_eq!(bucket.count, 8);
    assert_eq!(bucket.histogram.total(), 6);
    assert_eq!(
        bucket.histogram,
        PageRangeHistogram {
            low: 2,
            mid: 2,
            high: 2
        }
    );
}

#[test]
fn test_spreadsheet_metric_leaves_histogram_alone() {
    let mut bucket = AggregateBucket::new();
    bucket.record(2048, &ContentMetric::sheet(120, 8));

    assert_eq!(bucket.total_rows, 120);
    assert_eq!(bucket.total_columns, 8);
    assert_eq!(bucket.total_pages, 0);
    assert_eq!(bucket.histogram.total(), 0);
}

#[test]
fn test_observation_builders() {
    let obs = Observation::new("/data/notes", 12, None)
        .with_year(Some(2022))
        .with_metric(ContentMetric::pages(3));

    assert_eq!(obs.extension, NO_EXTENSION);
    assert_eq!(obs.year, Some(2022));
    assert_eq!(obs.metric.pages, 3);
}

#[test]
fn test_scan_config_serde_defaults() {
    let config: ScanConfig = serde_json::from_str(r#"{"root": "/srv/share"}"#).unwrap();

    assert_eq!(config.root, PathBuf::from("/srv/share"));
    assert!(config.include_hidden);
    assert!(!config.follow_symlinks);
    assert!(config.max_depth.is_none());
    assert!(config.ignore_patterns.is_empty());
}
