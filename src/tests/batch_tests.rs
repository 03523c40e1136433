use super::get_validator;
use crate::{
    interfaces::MatcherApi,
    regex_based_matcher::RegexBasedMatcher,
    validator::{
        config::ValidationConfig, country_registry::RegisteredCountry, BatchRequest,
        CountryRegistry, MobileValidator, PerformanceConfig, ValidationOptions,
    },
};

const PHONES: [&str; 5] = [
    "+996700123456",
    "+79991234567",
    "+14155552671",
    "+123456789",
    "invalid",
];

#[test]
fn batch_stats() {
    let validator = get_validator();
    let batch = validator.validate_batch(&PHONES, 3, None);

    assert_eq!(batch.stats.total, 5);
    assert_eq!(batch.stats.valid, 3);
    assert_eq!(batch.stats.invalid, 2);
    assert_eq!(batch.stats.errors, 0);
    assert_eq!(batch.stats.by_country.len(), 3);
    assert_eq!(batch.stats.by_country["kg"], 1);
    assert_eq!(batch.stats.by_country["ru"], 1);
    assert_eq!(batch.stats.by_country["us"], 1);

    let codes: Vec<&str> = batch
        .results
        .iter()
        .map(|result| result.country_code.as_str())
        .collect();
    assert_eq!(codes, vec!["kg", "ru", "us", "", ""]);
}

#[test]
fn batch_results_keep_input_order() {
    let validator = get_validator();
    let phones: Vec<String> = (0..200)
        .map(|i| {
            if i % 2 == 0 {
                format!("+996700{:06}", i)
            } else {
                format!("bad{}", i)
            }
        })
        .collect();
    for parallelism in [-1, 0, 1, 4, 1000] {
        let batch = validator.validate_batch(&phones, parallelism, None);
        assert_eq!(batch.results.len(), phones.len());
        for (phone, result) in phones.iter().zip(&batch.results) {
            assert_eq!(&result.original_number, phone);
        }
        assert_eq!(batch.stats.valid, 100);
        assert_eq!(batch.stats.by_country["kg"], 100);
    }
}

#[test]
fn empty_batch() {
    let validator = get_validator();
    let phones: Vec<String> = Vec::new();
    let batch = validator.validate_batch(&phones, 0, None);
    assert!(batch.results.is_empty());
    assert_eq!(batch.stats.total, 0);
    assert!(batch.stats.by_country.is_empty());
}

#[test]
fn batch_request_with_options() {
    let validator = get_validator();
    let request = BatchRequest {
        phones: PHONES.iter().map(|phone| phone.to_string()).collect(),
        parallelism: 2,
        options: Some(ValidationOptions {
            forbidden_countries: vec!["us".to_owned()],
            ..Default::default()
        }),
    };
    let batch = validator.validate_batch_request(&request);
    assert_eq!(batch.stats.valid, 2);
    assert_eq!(batch.stats.invalid, 3);
    assert_eq!(batch.results[2].error_message, "country us is not allowed");
}

#[test]
fn batch_respects_performance_limit() {
    let validator = get_validator();
    validator.set_performance_config(PerformanceConfig {
        max_concurrent_validations: 1,
        ..Default::default()
    });
    let batch = validator.validate_batch(&PHONES, 50, None);
    assert_eq!(batch.stats.valid, 3);
}

struct PanickingMatcher {
    inner: RegexBasedMatcher,
}

impl MatcherApi for PanickingMatcher {
    fn match_country(
        &self,
        phone: &str,
        country: &RegisteredCountry,
        config: &ValidationConfig,
    ) -> bool {
        if phone == "+996666666666" {
            panic!("matcher failure");
        }
        self.inner.match_country(phone, country, config)
    }
}

#[test]
fn panicking_validation_does_not_abort_batch() {
    let validator = MobileValidator::with_matcher(
        CountryRegistry::with_built_in_countries(),
        Box::new(PanickingMatcher {
            inner: RegexBasedMatcher::new(),
        }),
    );
    let phones = ["+996700123456", "+996666666666", "+14155552671"];
    let batch = validator.validate_batch(&phones, 2, None);

    assert_eq!(batch.stats.total, 3);
    assert_eq!(batch.stats.valid, 2);
    assert_eq!(batch.stats.invalid, 1);
    assert_eq!(batch.stats.errors, 1);
    assert!(!batch.results[1].is_valid);
    assert_eq!(batch.results[1].original_number, "+996666666666");
    assert_eq!(batch.results[1].error_message, "internal validation error");
}
