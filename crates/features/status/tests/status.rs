use nestly_i18n::{Language, Translator};
use nestly_status::{StatusBadge, StatusSeverity, classify_status, label_for};
use proptest::prelude::*;

#[test]
fn classification_ignores_case() {
    assert_eq!(classify_status("ACTIVE"), StatusSeverity::Success);
    assert_eq!(classify_status("active"), classify_status("ACTIVE"));
    assert_eq!(classify_status("\tOverdue\n"), StatusSeverity::Destructive);
}

#[test]
fn rule_groups() {
    assert_eq!(classify_status("fully_signed"), StatusSeverity::Success);
    assert_eq!(classify_status("tenant_signed"), StatusSeverity::Warning);
    assert_eq!(classify_status("pending_verification"), StatusSeverity::Warning);
    assert_eq!(classify_status("inactive"), StatusSeverity::Destructive);
    assert_eq!(classify_status("rented"), StatusSeverity::Neutral);
    assert_eq!(classify_status("unverified"), StatusSeverity::Neutral);
}

#[test]
fn unknown_statuses_are_secondary() {
    assert_eq!(classify_status("totally-unknown-status"), StatusSeverity::Secondary);
    assert_eq!(classify_status(""), StatusSeverity::Secondary);
    assert_eq!(classify_status("fully signed"), StatusSeverity::Secondary);
}

#[test]
fn explicit_label_wins() {
    let i18n = Translator::default();
    assert_eq!(label_for("paid", Some("Settled"), &i18n), "Settled");
    assert_eq!(label_for("whatever", Some(""), &i18n), "");
}

#[test]
fn known_statuses_are_translated() {
    let en = Translator::embedded(Language::En);
    let es = Translator::embedded(Language::Es);

    assert_eq!(label_for("fully_signed", None, &en), "Fully signed");
    assert_eq!(label_for("SENT_TO_TENANT", None, &en), "Pending signature");
    assert_eq!(label_for("sent_to_tenant", None, &es), "Pendiente de firma");
}

#[test]
fn unknown_statuses_are_humanized() {
    let i18n = Translator::default();
    assert_eq!(label_for("keys_handed_over", None, &i18n), "Keys Handed Over");
}

#[test]
fn badge_pairs_severity_and_label() {
    let badge = StatusBadge::resolve("Overdue", None, &Translator::embedded(Language::Es));
    assert_eq!(badge, StatusBadge { severity: StatusSeverity::Destructive, label: "Vencido".into() });

    let json = serde_json::to_value(&badge).unwrap();
    assert_eq!(json["severity"], "destructive");
}

proptest! {
    #[test]
    fn classification_is_total_and_case_blind(raw in "\\PC{0,32}") {
        let severity = classify_status(&raw);
        prop_assert_eq!(severity, classify_status(&raw));
        prop_assert_eq!(severity, classify_status(&raw.to_lowercase()));
    }

    #[test]
    fn labels_are_never_empty_for_words(raw in "[a-z]{1,8}(_[a-z]{1,8}){0,3}") {
        prop_assert!(!label_for(&raw, None, &Translator::default()).is_empty());
    }
}
