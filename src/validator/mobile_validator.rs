// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::Arc};

use log::{debug, trace, warn};

use super::{
    config::{CacheConfig, ConfigStore, PerformanceConfig, ValidationConfig},
    country_registry::{CountryRegistry, RegisteredCountry},
    enums::PhoneType,
    errors::ValidationError,
    helper_constants::{
        INVALID_FORMAT_MESSAGE, INVALID_FOR_COUNTRY_MESSAGE, PLUS_SIGN, UNDETECTED_COUNTRY_MESSAGE,
    },
    helper_functions::{detect_phone_type, suggestion_limit},
    normalizer, suggestions,
    types::{CountryRule, PhoneInfo, ValidationOptions, ValidationResult},
    Result,
};
use crate::{
    i18n::CountryCode, interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher,
    string_util::count_digits,
};

/// Validates mobile numbers against a registry of per-country rules.
///
/// Every operation reads a snapshot of the configuration once and passes
/// it down, so a concurrent `set_config` never affects a call in flight.
pub struct MobileValidator {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Country code to rule mapping, seeded with the built-in table.
    registry: CountryRegistry,

    config: ConfigStore,
}

impl MobileValidator {
    /// Validator with the built-in countries and the default configuration.
    pub fn new() -> Self {
        Self::with_registry(CountryRegistry::with_built_in_countries())
    }

    pub fn with_registry(registry: CountryRegistry) -> Self {
        Self::with_matcher(registry, Box::new(RegexBasedMatcher::new()))
    }

    pub(crate) fn with_matcher(
        registry: CountryRegistry,
        matcher_api: Box<dyn MatcherApi>,
    ) -> Self {
        Self {
            matcher_api,
            registry,
            config: ConfigStore::default(),
        }
    }

    fn normalize_code<'a>(code: &'a str, config: &ValidationConfig) -> Cow<'a, str> {
        CountryCode::normalize(code, config.case_sensitive_country_code)
    }

    fn match_country(
        &self,
        cleaned_phone: &str,
        country: &RegisteredCountry,
        config: &ValidationConfig,
    ) -> bool {
        self.matcher_api.match_country(cleaned_phone, country, config)
    }

    /// First country, in registration order, the cleaned phone is valid for.
    fn detect_with(
        &self,
        cleaned_phone: &str,
        config: &ValidationConfig,
    ) -> Option<Arc<RegisteredCountry>> {
        let detected = self
            .registry
            .entries()
            .into_iter()
            .find(|country| self.match_country(cleaned_phone, country, config));
        trace!(
            "Detected country {:?} for {}",
            detected.as_ref().map(|country| country.rule.code.as_str()),
            cleaned_phone
        );
        detected
    }

    /// Validates `phone` for `country_code` with the current configuration.
    /// An empty `country_code` makes the validator detect the country.
    pub fn validate(&self, phone: &str, country_code: &str) -> ValidationResult {
        self.validate_with_options(phone, country_code, &ValidationOptions::default())
    }

    pub fn validate_with_options(
        &self,
        phone: &str,
        country_code: &str,
        options: &ValidationOptions,
    ) -> ValidationResult {
        let config = match options.config {
            Some(config) => {
                if let Err(err) = config.validate() {
                    warn!("Rejected configuration override {:?}: {}", config, err);
                    let unknown = CountryCode::get_unknown();
                    return ValidationResult::invalid(phone, unknown, err.message);
                }
                config
            }
            None => self.config.get(),
        };
        let limit = suggestion_limit(options.max_suggestions);

        let requested_code = if country_code.trim().is_empty() {
            options.expected_country.as_str()
        } else {
            country_code
        };
        let code = if requested_code.trim().is_empty() {
            let cleaned = normalizer::clean(phone, &config);
            match self.detect_with(&cleaned, &config) {
                Some(country) => country.rule.code.clone(),
                None => {
                    let unknown = CountryCode::get_unknown();
                    return ValidationResult::invalid(phone, unknown, UNDETECTED_COUNTRY_MESSAGE);
                }
            }
        } else {
            Self::normalize_code(requested_code, &config).into_owned()
        };

        if !Self::is_country_allowed(&code, options, &config) {
            let message = fast_cat::concat_str!("country ", &code, " is not allowed");
            return ValidationResult::invalid(phone, &code, message);
        }

        let Some(country) = self.registry.get(&code) else {
            let mut result = ValidationResult::invalid(
                phone,
                &code,
                ValidationError::unsupported_country(requested_code).message,
            );
            if options.return_suggestions {
                result.suggestions =
                    suggestions::find_similar_countries(&self.registry, requested_code);
                result.suggestions.truncate(limit);
            }
            return result;
        };

        let cleaned = normalizer::clean(phone, &config);
        let error_message = if !normalizer::format_check(&cleaned, &config) {
            INVALID_FORMAT_MESSAGE.to_owned()
        } else if self.match_country(&cleaned, &country, &config) {
            return ValidationResult {
                is_valid: true,
                country_code: code,
                country_name: country.rule.country_name.clone(),
                formatted_number: cleaned,
                original_number: phone.to_owned(),
                ..Default::default()
            };
        } else {
            fast_cat::concat_str!(INVALID_FOR_COUNTRY_MESSAGE, &code)
        };

        let mut result = ValidationResult::invalid(phone, &code, error_message);
        result.country_name = country.rule.country_name.clone();
        if options.return_suggestions {
            result.suggestions = suggestions::suggest(&self.registry, phone, &code, limit);
        }
        result
    }

    fn is_country_allowed(
        code: &str,
        options: &ValidationOptions,
        config: &ValidationConfig,
    ) -> bool {
        let listed = |list: &[String]| {
            list.iter().any(|entry| Self::normalize_code(entry, config) == code)
        };
        if !options.allowed_countries.is_empty() && !listed(&options.allowed_countries) {
            return false;
        }
        !listed(&options.forbidden_countries)
    }

    /// Details about `phone` derived from the first country it is valid
    /// for. A number no country accepts yields `is_valid == false` and
    /// [`PhoneType::Unknown`].
    pub fn get_phone_info(&self, phone: &str) -> PhoneInfo {
        let config = self.config.get();
        let cleaned = normalizer::clean(phone, &config);
        let Some(country) = self.detect_with(&cleaned, &config) else {
            return PhoneInfo {
                number: phone.to_owned(),
                phone_type: PhoneType::Unknown,
                ..Default::default()
            };
        };
        let (prefix, local_number) = self.split_prefix(&cleaned);
        let phone_type = detect_phone_type(&cleaned, &country.rule.code);
        PhoneInfo {
            number: phone.to_owned(),
            country_code: country.rule.code.clone(),
            country_name: country.rule.country_name.clone(),
            prefix,
            local_number,
            is_valid: true,
            phone_type,
        }
    }

    /// Splits by the first registered prefix the number literally starts
    /// with.
    fn split_prefix(&self, cleaned_phone: &str) -> (String, String) {
        if !cleaned_phone.starts_with(PLUS_SIGN) {
            return (String::new(), cleaned_phone.to_owned());
        }
        for country in self.registry.entries() {
            let prefix = country.rule.prefix.as_str();
            if let Some(local_number) = cleaned_phone.strip_prefix(prefix) {
                return (prefix.to_owned(), local_number.to_owned());
            }
        }
        (String::new(), cleaned_phone.to_owned())
    }

    /// Returns the cleaned phone if it is valid for `country_code`.
    pub fn format_phone(&self, phone: &str, country_code: &str) -> Result<String> {
        let config = self.config.get();
        let code = Self::normalize_code(country_code, &config).into_owned();
        let Some(country) = self.registry.get(&code) else {
            return Err(ValidationError::unsupported_country(country_code));
        };
        let cleaned = normalizer::clean(phone, &config);
        if !self.match_country(&cleaned, &country, &config) {
            let message = fast_cat::concat_str!("invalid phone number format for country ", &code);
            return Err(ValidationError::invalid_format(message)
                .with_phone(phone)
                .with_country_code(code.as_str()));
        }
        Ok(cleaned)
    }

    pub fn detect_country(&self, phone: &str) -> Option<String> {
        let config = self.config.get();
        let cleaned = normalizer::clean(phone, &config);
        self.detect_with(&cleaned, &config)
            .map(|country| country.rule.code.clone())
    }

    pub fn is_phone_valid(&self, phone: &str, country_code: &str) -> bool {
        let config = self.config.get();
        let code = Self::normalize_code(country_code, &config);
        let Some(country) = self.registry.get(&code) else {
            return false;
        };
        let cleaned = normalizer::clean(phone, &config);
        self.match_country(&cleaned, &country, &config)
    }

    /// Validates like [`validate`](Self::validate) but tells exactly what is
    /// wrong with the number. On success the cleaned phone is returned.
    pub fn check(&self, phone: &str, country_code: &str) -> Result<String> {
        let config = self.config.get();
        let code = Self::normalize_code(country_code, &config).into_owned();
        let Some(country) = self.registry.get(&code) else {
            let similar = suggestions::find_similar_countries(&self.registry, country_code);
            let err = ValidationError::unsupported_country(country_code);
            return Err(err.with_suggestions(similar));
        };
        let rule = &country.rule;

        let cleaned = normalizer::clean(phone, &config);
        if cleaned.is_empty() {
            return Err(ValidationError::invalid_format(INVALID_FORMAT_MESSAGE)
                .with_phone(phone)
                .with_country_code(code.as_str()));
        }
        if config.require_plus_sign && !cleaned.starts_with(PLUS_SIGN) {
            return Err(ValidationError::missing_plus(&cleaned).with_country_code(code.as_str()));
        }
        let invalid_chars = normalizer::invalid_characters(&cleaned, &config);
        if !invalid_chars.is_empty() {
            return Err(ValidationError::invalid_characters(&cleaned, &invalid_chars)
                .with_country_code(code.as_str()));
        }

        if self.match_country(&cleaned, &country, &config) {
            return Ok(cleaned);
        }

        let Some(local_number) = cleaned.strip_prefix(rule.prefix.as_str()) else {
            let actual = self.actual_prefix(&cleaned, rule.prefix.len());
            return Err(ValidationError::invalid_prefix(&cleaned, &code, &rule.prefix, &actual));
        };
        let digits = count_digits(local_number);
        if !(rule.min_length..=rule.max_length).contains(&digits) {
            return Err(ValidationError::invalid_length(
                &cleaned,
                &code,
                rule.min_length,
                rule.max_length,
                digits,
            ));
        }
        let message = fast_cat::concat_str!("invalid phone number format for country ", &code);
        Err(ValidationError::invalid_format(message)
            .with_phone(cleaned)
            .with_country_code(code.as_str()))
    }

    /// Registered prefix the phone starts with, or as many leading
    /// characters as the expected prefix has.
    fn actual_prefix(&self, cleaned_phone: &str, expected_len: usize) -> String {
        if let Some(prefix) = self
            .registry
            .all_prefixes()
            .into_iter()
            .find(|prefix| cleaned_phone.starts_with(prefix.as_str()))
        {
            return prefix;
        }
        cleaned_phone
            .char_indices()
            .nth(expected_len)
            .map_or(cleaned_phone, |(end, _)| &cleaned_phone[..end])
            .to_owned()
    }

    /// Candidate corrections of `phone`, at most five.
    pub fn suggest(&self, phone: &str, country_code: &str) -> Vec<String> {
        let config = self.config.get();
        let code = Self::normalize_code(country_code, &config);
        suggestions::suggest(&self.registry, phone, &code, 0)
    }

    /// Registered codes one edit away from `country_code`.
    pub fn find_similar_countries(&self, country_code: &str) -> Vec<String> {
        suggestions::find_similar_countries(&self.registry, country_code)
    }

    /// Registered codes in registration order.
    pub fn list_countries(&self) -> Vec<String> {
        self.registry.list()
    }

    pub fn get_country_info(&self, country_code: &str) -> Option<CountryRule> {
        let config = self.config.get();
        self.registry.lookup(&Self::normalize_code(country_code, &config))
    }

    /// Registers or replaces a country. The code is normalized with the
    /// current configuration before it is stored.
    pub fn add_country(&self, mut rule: CountryRule) -> Result<()> {
        let config = self.config.get();
        rule.code = Self::normalize_code(&rule.code, &config).into_owned();
        self.registry.add(rule)
    }

    pub fn remove_country(&self, country_code: &str) {
        let config = self.config.get();
        self.registry.remove(&Self::normalize_code(country_code, &config));
    }

    pub fn countries_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.registry.codes_sharing_prefix(prefix)
    }

    pub fn all_prefixes(&self) -> Vec<String> {
        self.registry.all_prefixes()
    }

    /// Shortest number accepted by the country's lenient check: the prefix
    /// followed by `min_length` zeros.
    pub fn example_number(&self, country_code: &str) -> Option<String> {
        let rule = self.get_country_info(country_code)?;
        let zeros = "0".repeat(rule.min_length);
        let prefix = rule.prefix.as_str();
        Some(fast_cat::concat_str!(prefix, &zeros))
    }

    pub fn get_config(&self) -> ValidationConfig {
        self.config.get()
    }

    pub fn set_config(&self, config: ValidationConfig) -> Result<()> {
        self.config.set(config)
    }

    pub fn reset_config(&self) {
        debug!("Configuration reset to the default preset");
        self.config.reset();
    }

    pub fn list_presets(&self) -> Vec<&'static str> {
        ConfigStore::list_presets()
    }

    pub fn apply_preset(&self, name: &str) -> Result<()> {
        self.config.apply_preset(name)
    }

    pub fn performance_config(&self) -> PerformanceConfig {
        self.config.performance()
    }

    pub fn set_performance_config(&self, config: PerformanceConfig) {
        self.config.set_performance(config);
    }

    pub fn cache_config(&self) -> CacheConfig {
        self.config.cache()
    }

    pub fn set_cache_config(&self, config: CacheConfig) {
        self.config.set_cache(config);
    }
}

impl Default for MobileValidator {
    fn default() -> Self {
        Self::new()
    }
}
