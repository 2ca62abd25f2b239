//! The [`Settings`] handle: an in-memory copy of a JSON object file, written back atomically
//! on every change.

use crate::builder::SettingsBuilder;
use crate::error::{SettingsError, SettingsErrorExt};
use crate::maintenance::tmp_prefix;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub(crate) type Entries = Map<String, Value>;

/// The internal shared state of a [`Settings`] instance.
#[derive(Debug)]
pub struct SettingsInner {
    pub(crate) path: PathBuf,
    /// Held across the file write so writers land in order.
    pub(crate) entries: Mutex<Entries>,
    pub(crate) tmp_counter: AtomicU64,
}

/// A thread-safe handle to a settings file.
///
/// Reads are served from memory. Every `set`/`remove` rewrites the whole file with the
/// "atomic swap" pattern (unique temp file, `fsync`, `rename`), so the file on disk is
/// always a complete JSON object. Cloning shares the same state.
///
/// ```rust
/// use nestly_settings::{Settings, SettingsError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), SettingsError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # let path = tmp.path().join("prefs/settings.json");
///     let settings = Settings::builder().path(&path).open().await?;
///
///     settings.set("language", "es").await?;
///     assert_eq!(settings.get("language").await.as_deref(), Some("es"));
///
///     let reopened = Settings::builder().path(&path).create(false).open().await?;
///     assert_eq!(reopened.get("language").await.as_deref(), Some("es"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    pub(crate) inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Settings {
    #[must_use = "The settings are not loaded until you call .open()"]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// The settings file this handle writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value under `key` as text. Non-string JSON values are returned in JSON notation.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// Deserializes the value under `key`. Values of the wrong shape read as absent.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.lock().await.get(key).cloned()?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                warn!(key, error = %err, "Ignoring setting with unexpected shape");
                None
            },
        }
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.lock().await.contains_key(key)
    }

    /// Every key, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().await.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Stores a string value and persists the file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Io`] if the file cannot be written; memory is left unchanged.
    pub async fn set(&self, key: &str, value: impl Into<String>) -> Result<(), SettingsError> {
        self.set_value(key, Value::String(value.into())).await
    }

    /// Stores any serializable value and persists the file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Json`] if `value` cannot be represented as JSON, or
    /// [`SettingsError::Io`] if the file cannot be written.
    pub async fn set_as<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let value = serde_json::to_value(value).context(format!("Serializing `{key}`"))?;
        self.set_value(key, value).await
    }

    /// Removes `key`, returning whether it was present. The file is only rewritten when
    /// something changed.
    ///
    /// # Errors
    /// Returns [`SettingsError::Io`] if the file cannot be written.
    pub async fn remove(&self, key: &str) -> Result<bool, SettingsError> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(false);
        }

        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next).await?;
        *entries = next;

        debug!(key, "Setting removed");
        Ok(true)
    }

    async fn set_value(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        let mut entries = self.entries.lock().await;
        if entries.get(key) == Some(&value) {
            return Ok(());
        }

        let mut next = entries.clone();
        next.insert(key.to_owned(), value);
        self.persist(&next).await?;
        *entries = next;

        debug!(key, "Setting saved");
        Ok(())
    }

    /// Writes `entries` to disk atomically.
    async fn persist(&self, entries: &Entries) -> Result<(), SettingsError> {
        let target = &self.path;
        let data = serde_json::to_vec_pretty(entries).context("Serializing settings")?;
        let temp = unique_tmp_path(target, &self.tmp_counter);

        if let Err(err) = write_tmp(&temp, &data).await {
            let _ = fs::remove_file(&temp).await;
            return Err(err);
        }

        if let Err(err) = fs::rename(&temp, target).await {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(target)
                    .await
                    .context(format!("Failed to replace settings: {}", target.display()))?;
                fs::rename(&temp, target).await.context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    target.display()
                ))?;
            } else {
                let _ = fs::remove_file(&temp).await;
                return Err(SettingsError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), target.display())
                            .into(),
                    ),
                });
            }
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            sync_dir(parent).await;
        }

        Ok(())
    }
}

impl nestly_i18n::SettingsStore for Settings {
    type Error = SettingsError;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(Self::get(self, key).await)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::set(self, key, value).await
    }
}

async fn write_tmp(temp: &Path, data: &[u8]) -> Result<(), SettingsError> {
    let mut file = fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(temp)
        .await
        .context(format!("Temp creation failed: {}", temp.display()))?;
    file.write_all(data).await.context("Write failed")?;
    file.sync_all().await.context("Hardware sync failed")?;
    Ok(())
}

async fn sync_dir(path: &Path) {
    match fs::File::open(path).await {
        Ok(dir) => {
            if let Err(err) = dir.sync_all().await {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

/// `<name>.nestlytmp.<pid>.<n>`: unique across handles and processes sharing the file.
fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();
    target.with_file_name(format!("{}{pid}.{counter}", tmp_prefix(target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_names_carry_the_process_id() {
        let counter = AtomicU64::new(1);
        let target = Path::new("/data/settings.json");
        let pid = std::process::id();

        assert_eq!(
            unique_tmp_path(target, &counter),
            PathBuf::from(format!("/data/settings.json.nestlytmp.{pid}.1"))
        );
        assert_eq!(
            unique_tmp_path(target, &counter),
            PathBuf::from(format!("/data/settings.json.nestlytmp.{pid}.2"))
        );
    }
}
