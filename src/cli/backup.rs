//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::paths::OutlayPaths;
use crate::config::settings::Settings;
use crate::error::OutlayResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup of the expense file
    Create,

    /// List all available backups
    List,

    /// Restore the expense file from a backup
    Restore {
        /// Backup filename (use 'latest' for the most recent)
        backup: String,
    },

    /// Delete old backups beyond the retention count
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &OutlayPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> OutlayResult<()> {
    let manager = BackupManager::new(paths.clone(), settings.backup_retention);

    match cmd {
        BackupCommands::Create => {
            let (backup_path, deleted) = manager.create_backup_with_retention()?;
            let filename = backup_path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| backup_path.display().to_string());
            println!("Backup created: {}", filename);
            if !deleted.is_empty() {
                println!("Pruned {} old backup(s).", deleted.len());
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: outlay backup create");
                return Ok(());
            }

            println!("Available backups:");
            for (i, backup) in backups.iter().enumerate() {
                println!(
                    "  {}. {} ({}, {} bytes)",
                    i + 1,
                    backup.filename,
                    backup.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    backup.size_bytes,
                );
            }
            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup } => {
            let filename = if backup == "latest" {
                manager
                    .get_latest_backup()?
                    .map(|b| b.filename)
                    .ok_or_else(|| crate::error::OutlayError::backup_not_found("latest"))?
            } else {
                backup
            };

            manager.restore(&filename)?;
            println!("Restored expenses from: {}", filename);
        }

        BackupCommands::Prune => {
            let deleted = manager.enforce_retention()?;
            if deleted.is_empty() {
                println!("Nothing to prune.");
            } else {
                println!("Pruned {} old backup(s).", deleted.len());
            }
        }
    }

    Ok(())
}
