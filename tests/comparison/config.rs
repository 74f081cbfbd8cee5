//! Loading `versus.toml` and wiring it into the engine and rank store

use crate::common::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use versus::CONFIG_FILE_NAME;

#[test]
fn config_file_drives_engine_and_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "[comparison]\nparallel = true\n\n[ranking]\nlock_timeout_ms = 75\n",
    )
    .unwrap();

    let config = VersusConfig::from_file(&path).unwrap();
    let ranks = Arc::new(config.rank_store());
    assert_eq!(ranks.lock_timeout(), Duration::from_millis(75));

    let h = Headphones::new();
    let engine = ProductComparisonEngine::with_config(Arc::clone(&h.catalog), ranks, &config);
    assert!(engine.is_parallel());
}

#[test]
fn default_toml_written_to_disk_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, VersusConfig::default_toml()).unwrap();

    assert_eq!(VersusConfig::from_file(&path).unwrap(), VersusConfig::default());
}

#[test]
fn invalid_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[ranking]\nlock_timeout_ms = 0\n").unwrap();

    let err = VersusConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, VersusError::Config { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}
