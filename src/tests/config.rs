use crate::api::ConnectionPolicy;
use crate::config::Config;
use std::fs;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, contents).unwrap();
    temp_file
}

#[test]
fn test_config_defaults() {
    let temp_file = write_config(
        r#"
            customer_name: "acme"
            user_name: "ops"
            password: "hunter2"
        "#,
    );

    let config = Config::load(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.customer_name, "acme");
    assert_eq!(config.api_url, "https://api2.dynect.net");
    assert_eq!(config.record_ttl, 0);

    let options = config.client_options();
    assert_eq!(options.connect_timeout, Duration::from_secs(10));
    assert_eq!(options.timeout, Duration::from_secs(30));
    assert_eq!(options.policy, ConnectionPolicy::Reuse);

    let credentials = config.credentials();
    assert_eq!(credentials.user_name, "ops");
    assert!(!format!("{:?}", credentials).contains("hunter2"));
}

#[test]
fn test_config_overrides() {
    let temp_file = write_config(
        r#"
            customer_name: "acme"
            user_name: "ops"
            password: "hunter2"
            api_url: "http://localhost:8080"
            connect_timeout_secs: 2
            timeout_secs: 5
            reuse_connection: false
            record_ttl: 300
        "#,
    );

    let config = Config::load(temp_file.path().to_str().unwrap()).unwrap();
    let options = config.client_options();
    assert_eq!(options.api_url, "http://localhost:8080");
    assert_eq!(options.connect_timeout, Duration::from_secs(2));
    assert_eq!(options.timeout, Duration::from_secs(5));
    assert_eq!(options.policy, ConnectionPolicy::PerCall);
    assert_eq!(config.record_ttl, 300);
}

#[test]
fn test_config_rejects_empty_password() {
    let temp_file = write_config(
        r#"
            customer_name: "acme"
            user_name: "ops"
            password: ""
        "#,
    );

    let err = Config::load(temp_file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid config file"));
}

#[test]
fn test_config_rejects_zero_timeout() {
    let temp_file = write_config(
        r#"
            customer_name: "acme"
            user_name: "ops"
            password: "hunter2"
            timeout_secs: 0
        "#,
    );

    assert!(Config::load(temp_file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_invalid_config() {
    let temp_file = write_config(
        r#"
            customer_name: "acme"
            # missing required fields
        "#,
    );

    let err = Config::load(temp_file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_missing_config_file() {
    let err = Config::load("/nonexistent/dynect.yaml").unwrap_err();
    assert!(err.to_string().starts_with("Failed to open config file"));
}
