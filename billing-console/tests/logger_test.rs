use billing_console::init_logger_with_file;

#[test]
fn test_file_logger_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    init_logger_with_file(Some("debug"), log_dir.to_str());
    tracing::info!("logger smoke test");

    let files: Vec<_> = std::fs::read_dir(&log_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("billing-console"))
        .collect();
    assert_eq!(files.len(), 1);
}
