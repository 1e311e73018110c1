use anyhow::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Redirects all persistence into the named directory when set.
/// The integration tests rely on this for isolation.
pub const TEST_DIR_ENV: &str = "HUEKIT_TEST_DIR";

pub struct LocalStorage;

impl LocalStorage {
    /// Resolves `file` inside the platform data directory, creating the
    /// directory on first use. HUEKIT_TEST_DIR overrides the location.
    pub fn data_path(file: &str) -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(test_dir) = env::var(TEST_DIR_ENV) {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path.join(file));
        }

        if let Some(proj) = ProjectDirs::from("com", "huekit", "huekit") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(file));
        }
        None
    }

    /// Same resolution against the platform config directory.
    pub fn config_path(file: &str) -> Option<PathBuf> {
        if let Ok(test_dir) = env::var(TEST_DIR_ENV) {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path.join(file));
        }

        if let Some(proj) = ProjectDirs::from("com", "huekit", "huekit") {
            let config_dir = proj.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            return Some(config_dir.join(file));
        }
        None
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive lock on a `.lock` sidecar of
    /// `path`, serializing processes that touch the same file.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }
}
