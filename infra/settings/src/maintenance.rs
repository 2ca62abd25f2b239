use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{error, info, warn};
use walkdir::{DirEntry, WalkDir};

pub(crate) const TMP_MARKER: &str = ".nestlytmp.";

const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes temp files left next to `target` by interrupted writes.
pub(crate) async fn purge_tmp(target: &Path) {
    let Some(dir) = target.parent().map(Path::to_path_buf) else {
        return;
    };
    let prefix = tmp_prefix(target);
    let now = SystemTime::now();

    match tokio::task::spawn_blocking(move || remove_stale(&dir, &prefix, now, STALE_AFTER)).await
    {
        Ok((removed, failed)) if removed > 0 || failed > 0 => {
            info!(removed, failed, "Cleaned up temporary settings files");
        },
        Err(e) => {
            error!(error = %e, "Temp file cleanup task panicked");
        },
        _ => {},
    }
}

pub(crate) fn tmp_prefix(target: &Path) -> String {
    let name = target.file_name().and_then(|s| s.to_str()).unwrap_or("settings");
    format!("{name}{TMP_MARKER}")
}

fn remove_stale(dir: &Path, prefix: &str, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let dir: PathBuf = if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir.into() };
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .flatten()
        .filter(|entry| is_tmp(entry, prefix) && is_stale(entry, now, threshold))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "Failed to remove temp file");
                failed += 1;
            },
        });

    (removed, failed)
}

fn is_tmp(entry: &DirEntry, prefix: &str) -> bool {
    entry.file_type().is_file()
        && entry.file_name().to_str().is_some_and(|name| name.starts_with(prefix))
}

fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::fs::File;

    #[test]
    fn removes_only_stale_temp_files_of_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("settings.json");
        let prefix = tmp_prefix(&target);

        let stale = dir.path().join(format!("{prefix}1"));
        let fresh = dir.path().join(format!("{prefix}2"));
        let foreign = dir.path().join(format!("other.json{TMP_MARKER}3"));
        for path in [&stale, &fresh, &foreign] {
            fs::write(path, b"{}").unwrap();
        }
        let old = SystemTime::now() - Duration::from_secs(3600);
        File::options().write(true).open(&stale).unwrap().set_modified(old).unwrap();
        File::options().write(true).open(&foreign).unwrap().set_modified(old).unwrap();

        let (removed, failed) = remove_stale(dir.path(), &prefix, SystemTime::now(), STALE_AFTER);

        assert_eq!((removed, failed), (1, 0));
        assert!(!stale.exists());
        assert!(fresh.exists());
        assert!(foreign.exists());
    }
}
