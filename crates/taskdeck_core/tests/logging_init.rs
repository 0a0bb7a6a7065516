use taskdeck_core::{init_logging, init_logging_from_config, logging_status, CoreConfig};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    assert!(!init_logging_from_config(&CoreConfig::default()).unwrap());
    assert!(logging_status().is_none());

    let log_dir = tempfile::tempdir().expect("temp dir should be created");
    let log_dir_str = log_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();
    let second_dir = tempfile::tempdir().expect("temp dir should be created");
    let second_dir_str = second_dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging(" INFO ", &log_dir_str).expect("same config should be idempotent");

    let config = CoreConfig::default()
        .with_log_level("info")
        .and_then(|config| config.with_log_dir(&log_dir_str))
        .unwrap();
    assert!(init_logging_from_config(&config).unwrap());

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error =
        init_logging("info", &second_dir_str).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let both_error =
        init_logging("debug", &second_dir_str).expect_err("double conflict should fail");
    assert!(both_error.contains("initialized at"));

    let relative_error = init_logging("info", "logs/dev").expect_err("relative dir should fail");
    assert!(relative_error.contains("absolute"));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}
