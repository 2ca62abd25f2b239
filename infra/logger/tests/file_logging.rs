use nestly_domain::config::LoggingConfig;
use nestly_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_with_path_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        env_filter: Some("debug".to_owned()),
        path: Some(log_dir.clone()),
        json: true,
    };

    let logger = Logger::from_config("integration-file-logging", &config)?;
    assert_eq!(logger.dir(), Some(log_dir.as_path()));

    tracing::debug!(policy = "avatar", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("hello from integration test")).unwrap();
    let event: serde_json::Value = serde_json::from_str(line)?;
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["policy"], "avatar");

    Ok(())
}
