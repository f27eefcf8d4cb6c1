use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::config::PlotterConfig;
use crate::error::{PlotterError, Result};

/// Move every file in `config.source_dir` that ends with `config.extension`
/// and is at most `config.max_age_secs` old into `config.project_dir`.
///
/// Existing files in the project directory are overwritten. Returns the
/// destination paths in file-name order.
pub fn move_recent_files(config: &PlotterConfig, now: SystemTime) -> Result<Vec<PathBuf>> {
    let max_age = Duration::from_secs(config.max_age_secs);
    let source_dir = &config.source_dir;

    let mut candidates = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(|e| PlotterError::io(source_dir, e))? {
        let entry = entry.map_err(|e| PlotterError::io(source_dir, e))?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if !name.ends_with(&config.extension) {
            continue;
        }
        let path = entry.path();
        let meta = fs::metadata(&path).map_err(|e| PlotterError::io(&path, e))?;
        if !meta.is_file() {
            continue;
        }
        candidates.push((name, file_name, path, meta));
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut moved = Vec::new();
    for (name, file_name, src, meta) in candidates {
        let created = created_at(&meta).map_err(|e| PlotterError::io(&src, e))?;
        // Timestamps ahead of `now` count as brand new.
        let age = now.duration_since(created).unwrap_or(Duration::ZERO);
        if age > max_age {
            log::debug!("Skipping {name}: {}s old", age.as_secs());
            continue;
        }

        let dst = config.project_dir.join(&file_name);
        move_file(&src, &dst).map_err(|e| PlotterError::io(&src, e))?;
        log::info!(
            "Moved {name} to {} and overwrote any existing file.",
            config.project_dir.display()
        );
        moved.push(dst);
    }

    Ok(moved)
}

/// Creation time where the platform records it, modification time otherwise.
fn created_at(meta: &Metadata) -> io::Result<SystemTime> {
    meta.created().or_else(|_| meta.modified())
}

/// Rename, falling back to copy + delete when crossing filesystems or when
/// the platform refuses to rename over an existing file.
fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => return Ok(()),
        Err(e) => log::debug!(
            "Rename {} -> {} failed ({e}), copying instead",
            src.display(),
            dst.display()
        ),
    }
    fs::copy(src, dst)?;
    fs::remove_file(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn setup() -> (TempDir, TempDir, PlotterConfig) {
        let downloads = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let config = PlotterConfig {
            source_dir: downloads.path().to_path_buf(),
            project_dir: project.path().to_path_buf(),
            ..Default::default()
        };
        (downloads, project, config)
    }

    #[test]
    fn test_moves_fresh_txt_files() {
        let (downloads, project, config) = setup();
        fs::write(downloads.path().join("Earth.txt"), "fresh").unwrap();
        fs::write(downloads.path().join("Mars.txt"), "fresh").unwrap();

        let moved = move_recent_files(&config, SystemTime::now()).unwrap();

        assert_eq!(
            moved,
            vec![project.path().join("Earth.txt"), project.path().join("Mars.txt")]
        );
        assert!(!downloads.path().join("Earth.txt").exists());
        assert_eq!(
            fs::read_to_string(project.path().join("Mars.txt")).unwrap(),
            "fresh"
        );
    }

    #[test]
    fn test_leaves_files_older_than_max_age() {
        let (downloads, project, config) = setup();
        fs::write(downloads.path().join("Earth.txt"), "old").unwrap();

        let two_days_later = SystemTime::now() + 2 * DAY;
        let moved = move_recent_files(&config, two_days_later).unwrap();

        assert!(moved.is_empty());
        assert!(downloads.path().join("Earth.txt").exists());
        assert!(!project.path().join("Earth.txt").exists());
    }

    #[test]
    fn test_file_just_inside_max_age_is_moved() {
        let (downloads, _project, config) = setup();
        let path = downloads.path().join("Venus.txt");
        fs::write(&path, "edge").unwrap();
        let created = created_at(&fs::metadata(&path).unwrap()).unwrap();

        let moved = move_recent_files(&config, created + DAY).unwrap();
        assert_eq!(moved.len(), 1);
    }

    #[test]
    fn test_file_just_past_max_age_is_kept() {
        let (downloads, _project, config) = setup();
        let path = downloads.path().join("Venus.txt");
        fs::write(&path, "edge").unwrap();
        let created = created_at(&fs::metadata(&path).unwrap()).unwrap();

        let moved =
            move_recent_files(&config, created + DAY + Duration::from_secs(1)).unwrap();
        assert!(moved.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_future_timestamps_count_as_fresh() {
        let (downloads, _project, config) = setup();
        fs::write(downloads.path().join("Pluto.txt"), "skewed").unwrap();

        let an_hour_ago = SystemTime::now() - Duration::from_secs(3600);
        let moved = move_recent_files(&config, an_hour_ago).unwrap();
        assert_eq!(moved.len(), 1);
    }

    #[test]
    fn test_ignores_other_extensions_and_directories() {
        let (downloads, project, config) = setup();
        fs::write(downloads.path().join("notes.md"), "x").unwrap();
        fs::write(downloads.path().join("Earth.txt.part"), "x").unwrap();
        fs::create_dir(downloads.path().join("archive.txt")).unwrap();

        let moved = move_recent_files(&config, SystemTime::now()).unwrap();

        assert!(moved.is_empty());
        assert!(downloads.path().join("notes.md").exists());
        assert!(fs::read_dir(project.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_overwrites_existing_destination() {
        let (downloads, project, config) = setup();
        fs::write(project.path().join("Saturn.txt"), "stale").unwrap();
        fs::write(downloads.path().join("Saturn.txt"), "new run").unwrap();

        move_recent_files(&config, SystemTime::now()).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("Saturn.txt")).unwrap(),
            "new run"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_moved_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (downloads, project, config) = setup();
        let name = OsStr::from_bytes(b"Ear\xfft.txt");
        fs::write(downloads.path().join(name), "bytes").unwrap();

        let moved = move_recent_files(&config, SystemTime::now()).unwrap();

        assert_eq!(moved, vec![project.path().join(name)]);
        assert_eq!(
            fs::read_to_string(project.path().join(name)).unwrap(),
            "bytes"
        );
    }

    #[test]
    fn test_failed_rename_and_copy_keep_source() {
        let (downloads, project, _config) = setup();
        let src = downloads.path().join("Neptune.txt");
        fs::write(&src, "data").unwrap();
        // Neither rename nor copy can replace a directory.
        let dst = project.path().join("Neptune.txt");
        fs::create_dir(&dst).unwrap();

        assert!(move_file(&src, &dst).is_err());
        assert_eq!(fs::read_to_string(&src).unwrap(), "data");
        assert!(dst.is_dir());
    }

    #[test]
    fn test_missing_source_dir_is_an_error() {
        let (downloads, _project, mut config) = setup();
        config.source_dir = downloads.path().join("does-not-exist");

        let err = move_recent_files(&config, SystemTime::now()).unwrap_err();
        assert!(matches!(err, PlotterError::Io { .. }));
    }
}
