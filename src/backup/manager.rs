//! Backup manager for outlay
//!
//! The backing file is a single well-known path, so a backup is just a
//! timestamped copy of it in the backup directory. Restore copies a chosen
//! backup back over the backing file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::paths::OutlayPaths;
use crate::config::settings::BackupRetention;
use crate::error::{OutlayError, OutlayResult};

/// Metadata about one backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to the backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation, restore, and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    paths: OutlayPaths,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: OutlayPaths, retention: BackupRetention) -> Self {
        let backup_dir = paths.backup_dir();
        Self {
            backup_dir,
            paths,
            retention,
        }
    }

    /// Create a timestamped copy of the backing file
    ///
    /// Returns the path to the created backup file. Fails if there is no
    /// backing file to copy yet.
    pub fn create_backup(&self) -> OutlayResult<PathBuf> {
        let source = self.paths.expenses_file();
        if !source.exists() {
            return Err(OutlayError::Backup(
                "No expense data to back up yet".into(),
            ));
        }

        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let filename = format!(
            "expenses-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        fs::copy(&source, &backup_path)
            .map_err(|e| OutlayError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> OutlayResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| OutlayError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> OutlayResult<Option<BackupInfo>> {
        let path = self.backup_dir.join(filename);
        if path.exists() {
            Ok(parse_backup_info(&path))
        } else {
            Ok(None)
        }
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> OutlayResult<Option<BackupInfo>> {
        let backups = self.list_backups()?;
        Ok(backups.into_iter().next())
    }

    /// Restore a backup over the backing file
    pub fn restore(&self, filename: &str) -> OutlayResult<()> {
        let backup = self
            .get_backup(filename)?
            .ok_or_else(|| OutlayError::backup_not_found(filename))?;

        self.paths.ensure_directories()?;
        fs::copy(&backup.path, self.paths.expenses_file())
            .map_err(|e| OutlayError::Io(format!("Failed to restore backup: {}", e)))?;

        Ok(())
    }

    /// Delete old backups beyond the retention count
    ///
    /// Returns the paths that were deleted.
    pub fn enforce_retention(&self) -> OutlayResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let mut deleted = Vec::new();

        for backup in backups.into_iter().skip(self.retention.keep_count as usize) {
            fs::remove_file(&backup.path)
                .map_err(|e| OutlayError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce the retention policy
    pub fn create_backup_with_retention(&self) -> OutlayResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get the backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

/// Parse backup info from a backup file path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    // Expected filename: expenses-YYYYMMDD-HHMMSS-mmm.json
    let date_part = filename.strip_prefix("expenses-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;

    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}

/// Parse a backup timestamp from the filename date part
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    // Format: YYYYMMDD-HHMMSS or YYYYMMDD-HHMMSS-mmm
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let date_part = parts[0];
    let time_part = parts[1];
    let millis: u32 = if parts.len() == 3 {
        parts[2].parse().unwrap_or(0)
    } else {
        0
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    let datetime = chrono::NaiveDateTime::new(date, time);

    Some(DateTime::from_naive_utc_and_offset(datetime, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_manager() -> (BackupManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.expenses_file(), r#"{"expenses": []}"#).unwrap();

        let manager = BackupManager::new(paths, BackupRetention { keep_count: 3 });
        (manager, temp_dir)
    }

    #[test]
    fn test_create_backup() {
        let (manager, _temp) = create_test_manager();

        let backup_path = manager.create_backup().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("expenses-"));
    }

    #[test]
    fn test_backup_without_data_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let manager = BackupManager::new(paths, BackupRetention::default());

        assert!(manager.create_backup().is_err());
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (manager, _temp) = create_test_manager();

        manager.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(100));
        manager.create_backup().unwrap();

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at >= backups[1].created_at);
    }

    #[test]
    fn test_restore_roundtrip() {
        let (manager, _temp) = create_test_manager();

        let original = r#"{"expenses": []}"#;
        let backup_path = manager.create_backup().unwrap();
        let filename = backup_path.file_name().unwrap().to_string_lossy().to_string();

        // Clobber the backing file, then restore
        std::fs::write(manager.paths.expenses_file(), "clobbered").unwrap();
        manager.restore(&filename).unwrap();

        let restored = std::fs::read_to_string(manager.paths.expenses_file()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_restore_unknown_backup_not_found() {
        let (manager, _temp) = create_test_manager();
        let err = manager.restore("expenses-19990101-000000-000.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_retention_policy() {
        let (manager, _temp) = create_test_manager();

        for _ in 0..5 {
            manager.create_backup().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(50));
        }

        let deleted = manager.enforce_retention().unwrap();
        assert_eq!(deleted.len(), 2); // 5 - 3 = 2 deleted

        let remaining = manager.list_backups().unwrap();
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_get_latest_backup() {
        let (manager, _temp) = create_test_manager();

        assert!(manager.get_latest_backup().unwrap().is_none());

        let path = manager.create_backup().unwrap();
        let latest = manager.get_latest_backup().unwrap().unwrap();
        assert_eq!(latest.path, path);
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20250812-143022").unwrap();
        assert_eq!(timestamp.year(), 2025);
        assert_eq!(timestamp.month(), 8);
        assert_eq!(timestamp.day(), 12);

        let timestamp = parse_backup_timestamp("20250812-143022-456").unwrap();
        assert_eq!(timestamp.year(), 2025);

        assert!(parse_backup_timestamp("not-a-timestamp").is_none());
    }
}
