//! # Logger
//!
//! Installs the global `tracing` subscriber for Nestly binaries.
//!
//! * Console output goes to **stderr**, so command output on stdout stays machine-readable.
//!   ANSI colours are only used when stderr is a terminal.
//! * File output uses a non-blocking rolling appender (`<name>.<date>.log`), optionally as
//!   JSON lines.
//! * `RUST_LOG` is honoured unless an explicit [`LoggerBuilder::env_filter`] is given.
//! * [`Logger::from_config`] maps the `[logging]` section of the application config.
//!
//! ## Example
//!
//! ```rust
//! # use nestly_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("nestly")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use nestly_domain::config::LoggingConfig;
use private::Sealed;
use std::io::IsTerminal;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Options {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures the global subscriber. A name is required before [`LoggerBuilder::init`];
/// file-only knobs become available after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    options: Options,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the application; also the prefix of log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { options: self.options, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// How many rotated files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.options.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.options.rotation = rotation;
        self
    }

    /// Writes the log file as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.options.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.options.level = level;
        self
    }

    /// Explicit filter directives (`nestly_currency=trace,info`). Replaces `RUST_LOG`.
    /// An invalid filter makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.options.console = enabled;
        self
    }

    /// Also writes rolling log files into `dir`.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        self.options.path = Some(dir.into());
        LoggerBuilder { options: self.options, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file writer's worker.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an
    ///   invalid filter, or no output at all.
    /// - [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// - [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { options, name: WithName(name), .. } = self;
        validate(&options, &name)?;

        let filter = env_filter(&options)?;
        let mut layers = Vec::new();

        if options.console {
            let ansi = std::io::stderr().is_terminal();
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(ansi).boxed());
        }

        let guard = match &options.path {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory: {}", dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(options.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(options.max_files)
                    .build(dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if options.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable the console or set a path.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard, dir: options.path })
    }
}

/// Handle to the installed logging system.
///
/// Dropping it flushes and stops the file writer, so hold it for the lifetime of `main`.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    dir: Option<PathBuf>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { options: Options::default(), name: NoName, file: PhantomData }
    }

    /// Installs the subscriber described by the `[logging]` config section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level, otherwise see
    /// [`LoggerBuilder::init`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let mut builder = Self::builder().name(name).level(parse_level(&config.level)?);
        if let Some(filter) = &config.env_filter {
            builder = builder.env_filter(filter.clone());
        }

        match &config.path {
            Some(dir) => builder.path(dir).json(config.json).init(),
            None => builder.init(),
        }
    }

    /// The worker guard of the file writer, if file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }

    /// Directory receiving log files, if any.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

/// Parses a level name (`trace` .. `error`, `off`), case-insensitively.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{raw}'").into(),
        context: Some("expected trace, debug, info, warn, error or off".into()),
    })
}

fn validate(options: &Options, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if options.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(options: &Options) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(options.level.into());
    options.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("nestly").env_filter("nestly_i18n=debug");
        assert!(builder.options.console);
        assert_eq!(builder.options.level, LevelFilter::INFO);
        assert_eq!(builder.options.env_filter.as_deref(), Some("nestly_i18n=debug"));
        assert!(builder.options.path.is_none());
        assert!(!builder.options.json);
    }

    #[test]
    fn file_options_follow_path() {
        let builder = Logger::builder()
            .name("nestly")
            .console(false)
            .path("logs")
            .max_files(3)
            .json(true)
            .level(LevelFilter::TRACE);

        assert!(!builder.options.console);
        assert_eq!(builder.options.max_files, 3);
        assert!(builder.options.json);
        assert_eq!(builder.options.level, LevelFilter::TRACE);
        assert_eq!(builder.options.path.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn parses_levels() {
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(
            parse_level("verbose"),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    #[serial]
    fn rejects_invalid_setups_before_installing() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"));

        let err = Logger::builder().name("nestly").console(false).init().unwrap_err();
        assert!(err.to_string().contains("No logging output"));

        let err = Logger::builder().name("nestly").env_filter("nestly=loud").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("nestly").path("unused").max_files(0).init().unwrap_err();
        assert!(err.to_string().contains("max_files"));
    }
}
