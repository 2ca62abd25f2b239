use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nestly(settings: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nestly"));
    cmd.env_remove("RUST_LOG")
        .arg("--settings")
        .arg(settings.path().join("settings.json"))
        .arg("--log-level")
        .arg("error");
    cmd
}

#[test]
fn formats_sizes() {
    let tmp = TempDir::new().unwrap();
    nestly(&tmp).args(["size", "1536"]).assert().success().stdout("1.5 KB\n");
    nestly(&tmp).args(["size", "0"]).assert().success().stdout("0 Bytes\n");
}

#[test]
fn validates_files_with_exit_code() {
    let tmp = TempDir::new().unwrap();

    nestly(&tmp)
        .args(["validate", "--size", "1024", "--mime", "image/png"])
        .assert()
        .success()
        .stdout("ok\n");

    nestly(&tmp)
        .args(["validate", "--size", "20000000", "--mime", "video/mp4", "--policy", "document"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("size: File size exceeds the maximum of 10 MB"))
        .stdout(predicate::str::contains("type: File type video/mp4 is not allowed"));

    nestly(&tmp)
        .args(["validate", "--size", "10", "--mime", "image/png", "--policy", "avatar"])
        .args(["--width", "4000", "--height", "10"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("dimensions:"));

    nestly(&tmp).args(["lang", "es"]).assert().success();
    nestly(&tmp)
        .args(["validate", "--size", "1", "--mime", "video/mp4"])
        .assert()
        .failure()
        .stdout("type: El tipo de archivo video/mp4 no está permitido\n");
}

#[test]
fn validation_json_lists_errors() {
    let tmp = TempDir::new().unwrap();
    let output = nestly(&tmp)
        .args(["--json", "validate", "--size", "1", "--mime", "text/plain"])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["policy"], "image");
    assert_eq!(report["errors"][0]["field"], "type");
}

#[test]
fn formats_amounts_and_symbols() {
    let tmp = TempDir::new().unwrap();

    nestly(&tmp).args(["amount", "150000", "EUR"]).assert().success().stdout("€1,500.00\n");
    nestly(&tmp).args(["amount", "-250", "usd"]).assert().success().stdout("-$2.50\n");
    nestly(&tmp).args(["amount", "995"]).assert().success().stdout("€9.95\n");
    nestly(&tmp)
        .args(["amount", "1500000", "EUR", "--locale", "es-ES"])
        .assert()
        .success()
        .stdout("15.000,00\u{a0}€\n");
    nestly(&tmp).args(["amount", "100", "XYZ"]).assert().success().stdout("XYZ1.00\n");

    nestly(&tmp).args(["symbol", "GBP"]).assert().success().stdout("£\n");
}

#[test]
fn classifies_statuses() {
    let tmp = TempDir::new().unwrap();

    nestly(&tmp)
        .args(["status", "FULLY_SIGNED"])
        .assert()
        .success()
        .stdout("success\tFully signed\n");
    nestly(&tmp)
        .args(["status", "keys_handed_over"])
        .assert()
        .success()
        .stdout("secondary\tKeys Handed Over\n");
    nestly(&tmp)
        .args(["status", "paid", "--label", "Settled"])
        .assert()
        .success()
        .stdout("success\tSettled\n");
}

#[test]
fn translates_with_fallback_and_placeholders() {
    let tmp = TempDir::new().unwrap();

    nestly(&tmp).args(["t", "missingKey", "--lang", "es"]).assert().success().stdout("missingKey\n");
    nestly(&tmp)
        .args(["t", "upload.tooManyFiles", "--var", "max=3"])
        .assert()
        .success()
        .stdout("You can upload at most 3 files\n");
    nestly(&tmp).args(["t", "draft", "--lang", "fr"]).assert().failure();
}

#[test]
fn language_preference_persists_between_runs() {
    let tmp = TempDir::new().unwrap();

    nestly(&tmp).arg("lang").assert().success().stdout("en\n");
    nestly(&tmp).args(["lang", "ES"]).assert().success().stdout("es\n");
    nestly(&tmp).arg("lang").assert().success().stdout("es\n");

    nestly(&tmp).args(["status", "sent_to_tenant"]).assert().success().stdout("warning\tPendiente de firma\n");
    nestly(&tmp).args(["t", "paid"]).assert().success().stdout("Pagado\n");

    nestly(&tmp).args(["lang", "fr"]).assert().failure();
    nestly(&tmp).arg("lang").assert().success().stdout("es\n");
}

#[test]
fn corrupt_preference_falls_back_to_english() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("settings.json"), r#"{"language": "klingon"}"#).unwrap();

    nestly(&tmp).arg("lang").assert().success().stdout("en\n");
}

#[test]
fn unparsable_settings_file_falls_back_to_english() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("settings.json"), "not json").unwrap();

    nestly(&tmp).args(["status", "sent_to_tenant"]).assert().success().stdout("warning\tPending signature\n");
    nestly(&tmp).args(["t", "paid"]).assert().success().stdout("Paid\n");
    nestly(&tmp).arg("lang").assert().success().stdout("en\n");
}

#[test]
fn read_only_commands_leave_the_filesystem_alone() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("profile").join("settings.json");

    let mut status = Command::new(env!("CARGO_BIN_EXE_nestly"));
    status.env_remove("RUST_LOG").arg("--settings").arg(&nested).args(["--log-level", "error"]);
    status.args(["status", "paid"]).assert().success().stdout("success\tPaid\n");

    let mut lang = Command::new(env!("CARGO_BIN_EXE_nestly"));
    lang.env_remove("RUST_LOG").arg("--settings").arg(&nested).args(["--log-level", "error"]);
    lang.arg("lang").assert().success().stdout("en\n");

    assert!(!tmp.path().join("profile").exists());
}

#[test]
fn rejects_bad_arguments() {
    let tmp = TempDir::new().unwrap();
    nestly(&tmp).args(["size", "-1"]).assert().failure();
    nestly(&tmp).args(["validate", "--size", "1"]).assert().failure();
    nestly(&tmp)
        .args(["validate", "--size", "1", "--mime", "image/png", "--policy", "video"])
        .assert()
        .failure();
}
