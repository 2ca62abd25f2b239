use nestly_domain::severity::StatusSeverity;

/// Ordered rules; the first set containing the normalized status wins.
const RULES: [(StatusSeverity, &[&str]); 4] = [
    (
        StatusSeverity::Success,
        &["verified", "active", "completed", "paid", "approved", "success", "fully_signed", "accepted"],
    ),
    (
        StatusSeverity::Warning,
        &[
            "pending",
            "processing",
            "review",
            "waiting",
            "pending_verification",
            "sent_to_tenant",
            "tenant_signed",
        ],
    ),
    (
        StatusSeverity::Destructive,
        &["rejected", "cancelled", "failed", "overdue", "banned", "blocked", "inactive"],
    ),
    (StatusSeverity::Neutral, &["unverified", "draft", "new", "rented"]),
];

/// Severity for a raw backend status. Matching ignores case and surrounding whitespace;
/// unknown statuses are [`StatusSeverity::Secondary`].
///
/// ```rust
/// use nestly_status::{StatusSeverity, classify_status};
///
/// assert_eq!(classify_status(" Paid "), StatusSeverity::Success);
/// assert_eq!(classify_status("sent_to_tenant"), StatusSeverity::Warning);
/// assert_eq!(classify_status("archived"), StatusSeverity::Secondary);
/// ```
#[must_use]
pub fn classify_status(raw: &str) -> StatusSeverity {
    let status = normalize(raw);
    RULES
        .iter()
        .find(|(_, members)| members.contains(&status.as_str()))
        .map_or(StatusSeverity::Secondary, |(severity, _)| *severity)
}

/// Every status with a dedicated rule, in rule order.
pub fn known_statuses() -> impl Iterator<Item = (&'static str, StatusSeverity)> {
    RULES.iter().flat_map(|(severity, members)| members.iter().map(move |m| (*m, *severity)))
}

pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for (status, _) in known_statuses() {
            assert!(seen.insert(status), "{status} listed twice");
        }
    }

    #[test]
    fn every_listed_status_maps_to_its_rule() {
        for (status, severity) in known_statuses() {
            assert_eq!(classify_status(status), severity);
            assert_eq!(classify_status(&status.to_uppercase()), severity);
        }
    }
}
