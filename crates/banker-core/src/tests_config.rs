use std::io::Write;

use crate::config::{BankerConfig, DEFAULT_MAX_PROCESSES, DEFAULT_RESOURCE_COUNT};
use crate::error::BankerError;
use crate::safety::ScanOrder;

#[test]
fn defaults_match_classic_table() {
    let cfg = BankerConfig::default();
    assert_eq!(cfg.resource_count, DEFAULT_RESOURCE_COUNT);
    assert_eq!(cfg.max_processes, DEFAULT_MAX_PROCESSES);
    assert_eq!(cfg.scan_order, ScanOrder::Continue);
}

#[test]
fn partial_toml_keeps_defaults() {
    let cfg = BankerConfig::from_toml("scan_order = \"restart\"").unwrap();
    assert_eq!(cfg.scan_order, ScanOrder::Restart);
    assert_eq!(cfg.resource_count, DEFAULT_RESOURCE_COUNT);
}

#[test]
fn zero_width_is_rejected() {
    let err = BankerConfig::from_toml("resource_count = 0").unwrap_err();
    assert!(matches!(err, BankerError::Config(_)));
}

#[test]
fn toml_round_trips() {
    let cfg = BankerConfig {
        resource_count: 5,
        max_processes: 64,
        scan_order: ScanOrder::Restart,
    };
    let text = cfg.to_toml().unwrap();
    assert!(text.contains("max_processes = 64"));
    assert_eq!(BankerConfig::from_toml(&text).unwrap(), cfg);
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "resource_count = 4\nmax_processes = 8").unwrap();
    let cfg = BankerConfig::load(Some(file.path())).unwrap();
    assert_eq!(cfg.resource_count, 4);
    assert_eq!(cfg.max_processes, 8);
}

#[test]
fn load_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(matches!(
        BankerConfig::load(Some(&missing)),
        Err(BankerError::Config(_))
    ));
}
