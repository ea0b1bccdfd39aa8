use super::{Settings, load_config};
use serial_test::serial;
use std::time::Duration;

const FULL_ENV: [(&str, Option<&str>); 5] = [
    ("REDIS_HOST", Some("localhost")),
    ("REDIS_PORT", Some("6379")),
    ("PRODUCER_DURATION", Some("5")),
    ("PRODUCER_BATCH_SIZE", Some("100")),
    ("PRODUCER_PRODUCE_INDEFINITELY", Some("false")),
];

#[test]
#[serial]
fn test_load_config_from_env() {
    temp_env::with_vars(FULL_ENV, || {
        let settings = load_config().expect("full environment should load");
        assert_eq!(settings.redis_host, "localhost");
        assert_eq!(settings.redis_port, 6379);
        assert_eq!(settings.producer_duration, 5);
        assert_eq!(settings.producer_batch_size, 100);
        assert!(!settings.producer_produce_indefinitely);
    });
}

#[test]
#[serial]
fn test_missing_value_is_rejected() {
    let mut env = FULL_ENV;
    env[0] = ("REDIS_HOST", None);
    temp_env::with_vars(env, || {
        assert!(load_config().is_err());
    });
}

#[test]
#[serial]
fn test_false_string_disables_indefinite_run() {
    // The flag is a strict boolean: the literal text "false" must not be
    // treated as truthy.
    temp_env::with_vars(FULL_ENV, || {
        let settings = load_config().unwrap();
        assert!(!settings.producer_produce_indefinitely);
    });

    let mut env = FULL_ENV;
    env[4] = ("PRODUCER_PRODUCE_INDEFINITELY", Some("true"));
    temp_env::with_vars(env, || {
        let settings = load_config().unwrap();
        assert!(settings.producer_produce_indefinitely);
    });
}

#[test]
#[serial]
fn test_malformed_indefinite_flag_is_rejected() {
    let mut env = FULL_ENV;
    env[4] = ("PRODUCER_PRODUCE_INDEFINITELY", Some("yes please"));
    temp_env::with_vars(env, || {
        assert!(load_config().is_err());
    });
}

#[test]
#[serial]
fn test_truthy_lookalikes_are_rejected() {
    // Only the literal strings "true" and "false" count as booleans; the
    // coercions other loaders accept must not slip through.
    for raw in ["yes", "no", "1", "0", "on", "off", "False"] {
        let mut env = FULL_ENV;
        env[4] = ("PRODUCER_PRODUCE_INDEFINITELY", Some(raw));
        temp_env::with_vars(env, || {
            assert!(
                load_config().is_err(),
                "{raw:?} must be rejected as an indefinite-run flag"
            );
        });
    }
}

#[test]
#[serial]
fn test_zero_batch_size_is_rejected() {
    let mut env = FULL_ENV;
    env[3] = ("PRODUCER_BATCH_SIZE", Some("0"));
    temp_env::with_vars(env, || {
        let err = load_config().unwrap_err();
        assert!(err.to_string().contains("PRODUCER_BATCH_SIZE"));
    });
}

#[test]
fn test_target_duration_saturates_on_huge_values() {
    let settings = Settings {
        redis_host: "localhost".to_string(),
        redis_port: 6379,
        producer_duration: u64::MAX,
        producer_batch_size: 1,
        producer_produce_indefinitely: false,
    };

    assert_eq!(settings.target_duration(), Duration::from_secs(u64::MAX));
}

#[test]
#[serial]
fn test_settings_helpers() {
    temp_env::with_vars(FULL_ENV, || {
        let settings = load_config().unwrap();
        assert_eq!(settings.redis_url(), "redis://localhost:6379/");
        assert_eq!(settings.target_duration(), Duration::from_secs(5 * 60));
    });
}
