use docent::infrastructure::observability::TracingConfig;
use docent::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(!config.default_filter.is_empty());
}

#[test]
fn given_logging_settings_when_building_config_then_fields_are_copied() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
}
