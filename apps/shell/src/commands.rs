use crate::args::{Command, GlobalArgs};
use anyhow::{Context, Result};
use nestly::features::currency::CurrencyFormatter;
use nestly::{AppConfig, FileCandidate, Language, Normalizer};
use nestly_i18n::LanguagePreference;
use nestly_settings::{Settings, SettingsError};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

/// Runs one subcommand and maps its outcome to a process exit code.
pub async fn run(command: Command, global: &GlobalArgs, config: &AppConfig) -> Result<ExitCode> {
    let mut nestly = Normalizer::new(config).context("Invalid configuration")?;
    let out = Output { json: global.json };

    match command {
        Command::Size { bytes } => {
            let size = nestly.format_size(bytes);
            out.emit(&size, &json!({ "bytes": bytes, "formatted": size }));
        },
        Command::Validate { size, mime, width, height, policy } => {
            let mut file = FileCandidate::new(size, mime);
            if let (Some(width), Some(height)) = (width, height) {
                file = file.with_dimensions(width, height);
            }

            nestly.use_language(stored_language(global, config).await);
            let errors = nestly.validate_file_localized(policy, &file);
            if out.json {
                out.emit("", &json!({ "policy": policy, "valid": errors.is_empty(), "errors": errors }));
            } else if errors.is_empty() {
                println!("ok");
            } else {
                errors.iter().for_each(|error| println!("{error}"));
            }

            if !errors.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Amount { minor, code, locale } => {
            let formatter = formatter(&nestly, locale);
            let formatted = formatter.format_or_default(minor, code.as_deref());
            out.emit(
                &formatted,
                &json!({ "minor": minor, "locale": formatter.locale(), "formatted": formatted }),
            );
        },
        Command::Symbol { code, locale } => {
            let symbol = formatter(&nestly, locale).symbol(&code);
            out.emit(&symbol, &json!({ "code": code, "symbol": symbol }));
        },
        Command::Status { raw, label } => {
            nestly.use_language(stored_language(global, config).await);
            let badge = nestly.badge(&raw, label.as_deref());
            out.emit(&format!("{}\t{}", badge.severity, badge.label), &json!(badge));
        },
        Command::T { key, lang, vars } => {
            nestly.use_language(stored_language(global, config).await);
            if let Some(lang) = lang {
                nestly.set_language(&lang)?;
            }

            let args: Vec<(&str, &str)> =
                vars.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
            let text = nestly.translator().t_with(&key, &args);
            out.emit(&text, &json!({ "key": key, "language": nestly.language(), "text": text }));
        },
        Command::Lang { code } => {
            let language = match code {
                Some(code) => {
                    let mut translator = nestly.translator().clone();
                    preference(global, config).await?.apply(&mut translator, &code).await?
                },
                None => stored_language(global, config).await,
            };
            out.emit(language.code(), &json!({ "language": language }));
        },
    }

    Ok(ExitCode::SUCCESS)
}

struct Output {
    json: bool,
}

impl Output {
    fn emit(&self, text: &str, value: &serde_json::Value) {
        if self.json {
            println!("{value}");
        } else {
            println!("{text}");
        }
    }
}

fn formatter(nestly: &Normalizer, locale: Option<String>) -> CurrencyFormatter {
    let current = nestly.currency();
    locale.map_or_else(
        || current.clone(),
        |locale| {
            CurrencyFormatter::new(locale).with_default_currency(current.default_currency().as_str())
        },
    )
}

fn settings_path(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global.settings.clone().unwrap_or_else(|| config.i18n.settings_path.clone())
}

/// Opens the settings file for writing, creating it on first use.
async fn preference(
    global: &GlobalArgs,
    config: &AppConfig,
) -> Result<LanguagePreference<Settings>> {
    let path = settings_path(global, config);
    let settings = Settings::builder()
        .path(&path)
        .open()
        .await
        .with_context(|| format!("Cannot open settings at {}", path.display()))?;

    Ok(LanguagePreference::new(settings).with_default(config.i18n.default_language))
}

/// Reads the persisted language without touching the filesystem. A missing or unreadable
/// settings file yields the configured default.
async fn stored_language(global: &GlobalArgs, config: &AppConfig) -> Language {
    let path = settings_path(global, config);
    let default = config.i18n.default_language;

    match Settings::builder().path(&path).create(false).open().await {
        Ok(settings) => LanguagePreference::new(settings).with_default(default).load().await,
        Err(SettingsError::FileNotFound { .. }) => {
            debug!(path = %path.display(), "No settings file, using default language");
            default
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Unreadable settings, using default language");
            default
        },
    }
}
