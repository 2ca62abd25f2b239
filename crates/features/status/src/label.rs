use crate::classify::{classify_status, normalize};
use nestly_domain::severity::StatusSeverity;
use nestly_i18n::Translator;
use serde::Serialize;

/// Raw statuses with a translated label, and the key that holds it.
const LABEL_KEYS: &[(&str, &str)] = &[
    ("active", "active"),
    ("inactive", "inactive"),
    ("verified", "verified"),
    ("unverified", "unverified"),
    ("pending", "pending"),
    ("pending_verification", "pendingVerification"),
    ("processing", "processing"),
    ("review", "inReview"),
    ("waiting", "waiting"),
    ("completed", "completed"),
    ("paid", "paid"),
    ("overdue", "overdue"),
    ("approved", "approved"),
    ("accepted", "accepted"),
    ("rejected", "rejected"),
    ("cancelled", "cancelled"),
    ("failed", "failed"),
    ("banned", "banned"),
    ("blocked", "blocked"),
    ("draft", "draft"),
    ("new", "new"),
    ("rented", "rented"),
    ("fully_signed", "fullySigned"),
    ("sent_to_tenant", "pendingSignature"),
    ("tenant_signed", "tenantSigned"),
];

/// Translation key for a raw status, if it has one.
#[must_use]
pub fn label_key(raw: &str) -> Option<&'static str> {
    let status = normalize(raw);
    LABEL_KEYS.iter().find(|(s, _)| *s == status).map(|(_, key)| *key)
}

/// Display label for a raw status.
///
/// An explicit `label` wins verbatim. Otherwise a known status is translated, and anything
/// else is humanized (`"awaiting_keys"` becomes `"Awaiting Keys"`).
#[must_use]
pub fn label_for(raw: &str, label: Option<&str>, translator: &Translator) -> String {
    if let Some(label) = label {
        return label.to_owned();
    }

    match label_key(raw) {
        Some(key) => translator.t(key).into_owned(),
        None => humanize(raw),
    }
}

/// Underscores become spaces and each word gets an uppercase first letter.
#[must_use]
pub fn humanize(raw: &str) -> String {
    raw.trim()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A classified status ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub severity: StatusSeverity,
    pub label: String,
}

impl StatusBadge {
    #[must_use]
    pub fn resolve(raw: &str, label: Option<&str>, translator: &Translator) -> Self {
        Self { severity: classify_status(raw), label: label_for(raw, label, translator) }
    }
}
