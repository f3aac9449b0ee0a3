//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup summary of directories and the topic catalog

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use std::path::Path;

use crate::catalog::TopicCatalog;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger is already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs where documents come from at application startup
///
/// Reports:
/// - base and scratch directories
/// - catalog source and topic count
/// - duplicate titles/keys (first match wins for those)
pub fn log_startup_configuration(base_dir: &Path, scratch_dir: &Path, catalog_source: &str, catalog: &TopicCatalog) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📚 Document configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if base_dir.is_dir() {
        log::info!("✅ BASE_DIR: {}", base_dir.display());
    } else {
        log::warn!("⚠️  BASE_DIR: {} (not a directory, local documents will be missing)", base_dir.display());
    }
    log::info!("   SCRATCH_DIR: {}", scratch_dir.display());

    log::info!("   Catalog: {} ({} topics)", catalog_source, catalog.len());

    let duplicates = catalog.duplicates();
    for title in &duplicates.titles {
        log::warn!("⚠️  Duplicate topic title {:?}: only the first one is reachable", title);
    }
    for key in &duplicates.keys {
        log::warn!("⚠️  Duplicate topic key {:?}: only the first one is reachable", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_creates_log_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A second init in the same process fails, so only the file is checked
        let _ = init_logger(path);

        assert!(temp_file.path().exists());
    }

    #[test]
    fn test_log_startup_configuration_runs_with_duplicates() {
        let catalog = TopicCatalog::from_json_str(
            r#"[
                {"key": "a", "title": "A", "files": {"theory": {"path": "a.pdf"}, "practice": {"path": "b.pdf"}}},
                {"key": "a", "title": "A", "files": {"theory": {"path": "a.pdf"}, "practice": {"path": "b.pdf"}}}
            ]"#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();

        log_startup_configuration(dir.path(), &dir.path().join("tmp"), "test", &catalog);
    }
}
