use nestly_i18n::{Dictionary, I18nError, Language, Translator};
use proptest::prelude::*;
use std::sync::Arc;

fn sparse() -> Translator {
    let dictionary = Dictionary::default()
        .with_json(Language::En, r#"{"greeting": "Hello", "onlyEnglish": "Only in English"}"#)
        .and_then(|d| d.with_json(Language::Es, r#"{"greeting": "Hola"}"#))
        .expect("valid bundles");
    Translator::new(Arc::new(dictionary), Language::Es)
}

#[test]
fn resolves_current_language_first() {
    assert_eq!(sparse().t("greeting"), "Hola");
}

#[test]
fn falls_back_to_english() {
    assert_eq!(sparse().t("onlyEnglish"), "Only in English");
}

#[test]
fn missing_key_returns_key_verbatim() {
    let i18n = sparse();
    assert_eq!(i18n.t("missingKey"), "missingKey");
    assert!(!i18n.has("missingKey"));
    assert!(i18n.has("onlyEnglish"));
}

#[test]
fn accepts_supported_languages_loosely() {
    let mut i18n = sparse();

    assert_eq!(i18n.set_language(" EN ").unwrap(), Language::En);
    assert_eq!(i18n.t("greeting"), "Hello");

    assert_eq!(i18n.set_language("es").unwrap(), Language::Es);
    assert_eq!(i18n.language(), Language::Es);
}

#[test]
fn rejected_language_keeps_state() {
    let mut i18n = sparse();

    let err = i18n.set_language("fr").unwrap_err();
    assert!(matches!(err, I18nError::UnsupportedLanguage { .. }));
    assert_eq!(i18n.language(), Language::Es);
    assert_eq!(i18n.t("greeting"), "Hola");

    assert!(i18n.set_language("").is_err());
    assert!(i18n.set_language("en-US").is_err());
}

#[test]
fn substitutes_placeholders() {
    let mut i18n = Translator::embedded(Language::En);
    assert_eq!(
        i18n.t_with("upload.tooManyFiles", &[("max", "20")]),
        "You can upload at most 20 files"
    );

    i18n.use_language(Language::Es);
    assert_eq!(
        i18n.t_with("upload.dimensionsTooLarge", &[("width", "1024"), ("height", "768")]),
        "La imagen debe medir como máximo 1024x768 píxeles"
    );
}

#[test]
fn unmatched_placeholders_stay() {
    let i18n = Translator::embedded(Language::En);
    assert_eq!(i18n.t_with("upload.fileTooLarge", &[]), "File size exceeds the maximum of {max}");
    assert_eq!(i18n.t_with("raw {x}", &[("x", "1")]), "raw 1");
}

#[test]
fn translators_share_one_dictionary() {
    let en = Translator::embedded(Language::En);
    let es = Translator::embedded(Language::Es);
    assert!(std::ptr::eq(en.dictionary(), es.dictionary()));
    assert_eq!(en.t("rented"), "Rented");
    assert_eq!(es.t("rented"), "Alquilado");
}

proptest! {
    #[test]
    fn lookup_is_total_and_stable(key in "\\PC{0,24}", spanish in any::<bool>()) {
        let language = if spanish { Language::Es } else { Language::En };
        let i18n = Translator::embedded(language);

        let first = i18n.t(&key).into_owned();
        prop_assert_eq!(&first, &i18n.t(&key));
        if !i18n.has(&key) {
            prop_assert_eq!(first, key);
        }
    }
}
