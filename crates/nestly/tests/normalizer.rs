use nestly::domain::config::PolicyConfig;
use nestly::{
    AppConfig, FileCandidate, Language, Normalizer, NormalizerError, StatusSeverity, UploadKind,
    ValidationField,
};
use strum::IntoEnumIterator;

#[test]
fn defaults_cover_every_operation() {
    let nestly = Normalizer::new(&AppConfig::default()).unwrap();

    assert_eq!(nestly.format_size(1536), "1.5 KB");
    assert_eq!(nestly.format_amount(150_000, "EUR"), "€1,500.00");
    assert_eq!(nestly.symbol_only("GBP"), "£");
    assert_eq!(nestly.classify_status("ACTIVE"), StatusSeverity::Success);
    assert_eq!(nestly.label_for("tenant_signed", None), "Signed by tenant");
    assert_eq!(nestly.t("missingKey"), "missingKey");
    assert_eq!(nestly.language(), Language::En);
}

#[test]
fn each_kind_uses_its_policy() {
    let nestly = Normalizer::new(&AppConfig::default()).unwrap();
    let pdf = FileCandidate::new(1024, "application/pdf");

    assert!(nestly.validate_file(UploadKind::Document, &pdf).is_empty());
    let errors = nestly.validate_file(UploadKind::Image, &pdf);
    assert_eq!(errors[0].field, ValidationField::Type);

    for kind in UploadKind::iter() {
        let png = FileCandidate::new(1024, "image/png");
        assert!(nestly.validate_file(kind, &png).is_empty(), "{kind} rejects a small PNG");
    }

    let two = vec![FileCandidate::new(1, "image/png"); 2];
    assert!(nestly.validate_batch(UploadKind::Avatar, &two).count_error.is_some());
}

#[test]
fn configuration_flows_into_components() {
    let mut config = AppConfig::default();
    config.currency.locale = "es-ES".to_owned();
    config.i18n.default_language = Language::Es;
    config.uploads.avatar.max_size_bytes = 100;

    let nestly = Normalizer::new(&config).unwrap();
    assert_eq!(nestly.format_amount(1_500_000, "EUR"), "15.000,00\u{a0}€");
    assert_eq!(nestly.label_for("paid", None), "Pagado");
    assert_eq!(nestly.badge("paid", None).severity, StatusSeverity::Success);

    let errors = nestly.validate_file(UploadKind::Avatar, &FileCandidate::new(101, "image/png"));
    assert_eq!(errors[0].message, "File size exceeds the maximum of 100 Bytes");
}

#[test]
fn validation_messages_follow_the_language() {
    let mut nestly = Normalizer::new(&AppConfig::default()).unwrap();
    let zip = FileCandidate::new(3 * 1024 * 1024, "application/zip");

    let errors = nestly.validate_file_localized(UploadKind::Avatar, &zip);
    assert_eq!(errors, nestly.validate_file(UploadKind::Avatar, &zip));
    assert_eq!(errors[0].message, "File size exceeds the maximum of 2 MB");

    nestly.use_language(Language::Es);
    let errors = nestly.validate_file_localized(UploadKind::Avatar, &zip);
    assert_eq!(errors[0].field, ValidationField::Size);
    assert_eq!(errors[0].message, "El archivo supera el máximo de 2 MB");
    assert_eq!(errors[1].message, "El tipo de archivo application/zip no está permitido");

    let huge = FileCandidate::new(10, "image/png").with_dimensions(4000, 10);
    let errors = nestly.validate_file_localized(UploadKind::Avatar, &huge);
    assert_eq!(errors[0].message, "La imagen debe medir como máximo 1024x1024 píxeles");
}

#[test]
fn invalid_policy_names_the_section() {
    let mut config = AppConfig::default();
    config.uploads.document = PolicyConfig { allowed_mime_types: Vec::new(), ..PolicyConfig::document() };

    let err = Normalizer::new(&config).unwrap_err();
    assert!(matches!(err, NormalizerError::Policy { .. }));
    assert!(err.to_string().contains("uploads.document"));
}

#[test]
fn language_switch_is_validated() {
    let mut nestly = Normalizer::new(&AppConfig::default()).unwrap();

    assert!(matches!(nestly.set_language("fr"), Err(NormalizerError::I18n { .. })));
    assert_eq!(nestly.language(), Language::En);

    assert_eq!(nestly.set_language("es").unwrap(), Language::Es);
    assert_eq!(nestly.t("draft"), "Borrador");

    nestly.use_language(Language::En);
    assert_eq!(nestly.t("draft"), "Draft");
}
