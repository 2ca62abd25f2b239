use crate::engine::{Entries, Settings, SettingsInner};
use crate::error::{SettingsError, SettingsErrorExt};
use crate::maintenance;
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub struct NoPath;
#[derive(Debug)]
pub struct WithPath(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoPath {}
impl Sealed for WithPath {}

#[allow(private_bounds)]
#[derive(Debug)]
pub struct SettingsBuilder<S: Sealed = NoPath> {
    state: S,
    create: bool,
}

impl Default for SettingsBuilder<NoPath> {
    fn default() -> Self {
        Self { state: NoPath, create: true }
    }
}

#[allow(private_bounds)]
impl<S: Sealed> SettingsBuilder<S> {
    #[must_use = "Sets whether a missing settings file is treated as empty"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl SettingsBuilder<NoPath> {
    #[must_use = "Creates a new settings builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the settings file path"]
    pub fn path(self, path: impl Into<PathBuf>) -> SettingsBuilder<WithPath> {
        SettingsBuilder { state: WithPath(path.into()), create: self.create }
    }
}

impl SettingsBuilder<WithPath> {
    /// Loads the settings file.
    ///
    /// 1. With `create(true)` (the default) the parent directory is created and a missing
    ///    file reads as empty; it is written on the first change.
    /// 2. Temp files older than five minutes left by interrupted writes are removed.
    /// 3. The file is parsed as a JSON object.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::FileNotFound`] if the file is missing and `create` is false.
    /// - [`SettingsError::Json`] if the file is not a JSON object.
    /// - [`SettingsError::Io`] if the directory cannot be created or the file read.
    pub async fn open(self) -> Result<Settings, SettingsError> {
        let path = self.state.0;

        if self.create
            && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create settings directory: {}", parent.display()))?;
        }

        maintenance::purge_tmp(&path).await;

        let entries: Entries = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Entries::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .context(format!("Failed to parse settings: {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && self.create => {
                debug!(path = %path.display(), "Settings file absent, starting empty");
                Entries::new()
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(SettingsError::FileNotFound {
                    message: path.display().to_string().into(),
                    context: None,
                });
            },
            Err(err) => {
                return Err(SettingsError::Io {
                    source: err,
                    context: Some(format!("Read failed: {}", path.display()).into()),
                });
            },
        };

        debug!(path = %path.display(), keys = entries.len(), "Settings loaded");

        Ok(Settings {
            inner: Arc::new(SettingsInner {
                path,
                entries: Mutex::new(entries),
                tmp_counter: AtomicU64::new(1),
            }),
        })
    }
}
