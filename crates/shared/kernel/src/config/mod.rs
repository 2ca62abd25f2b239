use config::{Config, Environment, File};
use nestly_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "nestly";

/// Prefix for environment overrides (`NESTLY__CURRENCY__LOCALE=es-ES`).
pub const ENV_PREFIX: &str = "NESTLY";

/// Custom error type for config loading.
#[nestly_derive::nestly_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering:
/// 1. **Base File**: `path` if given (must exist), otherwise the optional `nestly.{toml,json,...}`
///    file in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `NESTLY__`, nested with double
///    underscores (`NESTLY__I18N__DEFAULT_LANGUAGE` maps to `i18n.default_language`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use nestly_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading config");

    load_layers(&effective_path, required, environment())
}

/// Loads the workspace [`AppConfig`]; every section falls back to its defaults.
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}

/// `NESTLY__` overrides, with numbers and booleans parsed out of the raw strings.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_layers<T>(path: &Path, required: bool, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    #[serial]
    fn environment_overrides_numbers_and_booleans() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nestly.toml");
        fs::write(&path, "[uploads.image]\nmax_size_bytes = 5\nallowed_mime_types = [\"image/png\"]\n")
            .expect("write config");

        let cfg: AppConfig = load_layers(
            &path,
            true,
            env(&[
                ("NESTLY__UPLOADS__IMAGE__MAX_SIZE_BYTES", "100"),
                ("NESTLY__LOGGING__JSON", "true"),
                ("NESTLY__CURRENCY__LOCALE", "es-ES"),
            ]),
        )
        .expect("overrides deserialize");

        assert_eq!(cfg.uploads.image.max_size_bytes, 100);
        assert_eq!(cfg.uploads.image.allowed_mime_types, vec!["image/png".to_owned()]);
        assert!(cfg.logging.json);
        assert_eq!(cfg.currency.locale, "es-ES");
    }

    #[test]
    #[serial]
    fn unrelated_variables_are_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg: AppConfig = load_layers(
            &dir.path().join("absent"),
            false,
            env(&[("OTHER__LOGGING__JSON", "true"), ("NESTLY__I18N__DEFAULT_LANGUAGE", "es")]),
        )
        .expect("defaults with override");

        assert!(!cfg.logging.json);
        assert_eq!(cfg.i18n.default_language, nestly_domain::language::Language::Es);
    }
}
