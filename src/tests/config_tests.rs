use std::time::Duration;

use strum::IntoEnumIterator;

use super::{country_code::CountryCode, get_validator};
use crate::validator::{
    BatchResult, CacheConfig, ConfigPreset, ConfigStore, ErrorKind, PerformanceConfig, PhoneInfo,
    PhoneType, ValidationConfig, ValidationError, ValidationResult,
};

#[test]
fn default_config() {
    let validator = get_validator();
    let config = validator.get_config();
    assert_eq!(config, ValidationConfig::default());
    assert!(config.strict_mode);
    assert!(config.require_plus_sign);
    assert!(!config.allow_spaces);
    assert!(!config.case_sensitive_country_code);
}

#[test]
fn set_config_rejects_plus_without_strict_mode() {
    let validator = get_validator();
    let config = ValidationConfig::default()
        .strict_mode(false)
        .require_plus_sign(true);
    let err = validator.set_config(config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(
        err.message,
        "require_plus_sign can only be true when strict_mode is enabled"
    );
    assert_eq!(validator.get_config(), ValidationConfig::default());

    let config = config.require_plus_sign(false).allow_spaces(true);
    validator.set_config(config).unwrap();
    assert_eq!(validator.get_config(), config);

    validator.reset_config();
    assert_eq!(validator.get_config(), ConfigPreset::Default.config());
}

#[test]
fn presets() {
    let validator = get_validator();
    assert_eq!(
        validator.list_presets(),
        vec!["default", "strict", "relaxed", "international", "local", "api"]
    );
    for preset in ConfigPreset::iter() {
        assert!(preset.config().validate().is_ok(), "preset {}", preset);
        let name: &'static str = preset.into();
        assert_eq!(ConfigStore::preset_config(name), Some(preset.config()));
    }

    validator.apply_preset("relaxed").unwrap();
    assert_eq!(validator.get_config(), ConfigPreset::Relaxed.config());
    assert!(!validator.get_config().strict_mode);

    let err = validator.apply_preset("nope").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert_eq!(err.message, "unknown configuration preset: nope");
    assert_eq!(validator.get_config(), ConfigPreset::Relaxed.config());
}

#[test]
fn international_preset_keeps_spaces() {
    let validator = get_validator();
    validator.apply_preset("international").unwrap();
    let result = validator.validate("+996 (700) 123456", CountryCode::kg());
    // parentheses are removed, spaces are kept and the pattern has none
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "invalid phone number for country kg");
    assert!(validator.validate("+996(700)123456", CountryCode::kg()).is_valid);
}

#[test]
fn performance_config() {
    let validator = get_validator();
    let config = validator.performance_config();
    assert_eq!(config.max_concurrent_validations, 100);
    assert_eq!(config.validation_timeout, Duration::from_millis(100));
    assert!(!config.enable_profiling);

    let config = PerformanceConfig {
        max_concurrent_validations: 4,
        ..Default::default()
    };
    validator.set_performance_config(config);
    assert_eq!(validator.performance_config(), config);
}

#[test]
fn cache_config() {
    let validator = get_validator();
    let config = validator.cache_config();
    assert_eq!(config, CacheConfig::default());
    assert!(!config.enabled);
    assert_eq!(config.max_size, 10_000);
    assert_eq!(config.ttl, Duration::from_secs(3600));
    assert_eq!(config.cleanup_interval, Duration::from_secs(300));

    let config = CacheConfig {
        enabled: true,
        max_size: 16,
        ..Default::default()
    };
    validator.set_cache_config(config);
    assert_eq!(validator.cache_config(), config);
    // reserved: results stay the same whatever the cache settings
    assert!(validator.validate("+996700123456", CountryCode::kg()).is_valid);
}

#[test]
fn errors() {
    let err = ValidationError::invalid_length("+99670012345", CountryCode::kg(), 9, 9, 8);
    assert_eq!(err.error_code(), 1002);
    assert!(!err.is_retryable());
    assert_eq!(err.localized_message("ru"), "Неверная длина номера телефона");
    assert_eq!(err.localized_message("fr"), "Invalid phone number length");
    assert_eq!(
        err.describe(),
        "[invalid_length] invalid phone number length: expected 9 digits, got 8 (Phone: +99670012345) (Country: kg)"
    );
    assert_eq!(err.to_string(), err.message);

    let err = ValidationError::new(ErrorKind::Unknown, "something else");
    assert_eq!(err.error_code(), 1000);
    assert_eq!(err.localized_message("kg"), "something else");

    let err = ValidationError::missing_plus("996700123456");
    assert_eq!(err.error_code(), 1006);
    assert!(err.is_retryable());
    assert_eq!(err.suggestions, vec!["+996700123456"]);
}

#[test]
fn serialized_shape() {
    let validator = get_validator();

    let result = validator.validate("+123456789", "");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "is_valid": false,
            "original_number": "+123456789",
            "error_message": "cannot determine country for phone number",
        })
    );
    let parsed: ValidationResult = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, result);

    let info = PhoneInfo {
        phone_type: PhoneType::TollFree,
        ..Default::default()
    };
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["type"], "toll_free");

    let json = serde_json::to_value(ErrorKind::UnsupportedCountry).unwrap();
    assert_eq!(json, "unsupported_country");

    let batch = validator.validate_batch(&["+996700123456"], 1, None);
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["stats"]["by_country"]["kg"], 1);
    let parsed: BatchResult = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.results, batch.results);
}
