//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "bizgrow360";
const APPLICATION: &str = "console";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
pub const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/console` or `~/.cache/console`
/// - macOS: `~/Library/Caches/com.bizgrow360.console`
/// - Windows: `C:\Users\<User>\AppData\Local\bizgrow360\console\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Rotate, then create a fresh `latest.log` in `dir`.
pub fn open_log_in(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    rotate_logs_in(dir);
    File::create(dir.join(LATEST_LOG))
}

/// [`open_log_in`] for the platform cache directory. `None` when there is no
/// home directory to put it in.
pub fn open_log() -> Option<io::Result<File>> {
    cache_dir().map(|dir| open_log_in(&dir))
}

/// Archive the previous `latest.log` in `dir` under a timestamped name and
/// prune old logs.
pub fn rotate_logs_in(dir: &Path) {
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(dir);
}

/// Remove archived logs beyond [`MAX_OLD_LOGS`], oldest first.
fn cleanup_old_logs(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Timestamped names sort chronologically.
    logs.sort_by_key(|e| e.file_name());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
