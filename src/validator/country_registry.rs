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

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use dashmap::{mapref::entry::Entry, DashMap};
use log::{debug, warn};
use regex::Regex;

use super::{
    countries::built_in_countries,
    errors::ValidationError,
    helper_constants::{PLUS_SIGN, REGISTRY_CAPACITY},
    types::CountryRule,
};
use crate::{regex_util::anchored_pattern, regexp_cache::RegexCache};

/// A rule as stored in the registry: immutable once inserted, replaced as a
/// whole on re-registration.
#[derive(Debug)]
pub struct RegisteredCountry {
    pub rule: CountryRule,
    /// Compiled, anchored `rule.pattern`. `None` iff the pattern is empty.
    pub(crate) regex: Option<Arc<Regex>>,
    /// Position in the registration order.
    sequence: u64,
}

/// Mapping from country code to its phone format.
///
/// Codes are stored exactly as given; case normalization is the caller's
/// job. Every listing walks the entries in registration order, which makes
/// detection among countries that share a prefix deterministic.
pub struct CountryRegistry {
    countries: DashMap<String, Arc<RegisteredCountry>>,
    regex_cache: RegexCache,
    next_sequence: AtomicU64,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self {
            countries: DashMap::with_capacity(REGISTRY_CAPACITY),
            regex_cache: RegexCache::with_capacity(REGISTRY_CAPACITY),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Registry seeded with the built-in country table.
    pub fn with_built_in_countries() -> Self {
        let registry = Self::new();
        for rule in built_in_countries() {
            if let Err(err) = registry.add(rule) {
                let err_message = format!("Built-in country table is invalid: {}", err.describe());
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
        registry
    }

    /// Validates and inserts the rule, replacing the rule registered under
    /// the same code. A replaced country keeps its position in the
    /// registration order.
    pub fn add(&self, rule: CountryRule) -> Result<(), ValidationError> {
        let regex = self.check_rule(&rule).inspect_err(|err| {
            warn!("Rejected country rule {:?}: {}", rule.code, err);
        })?;
        let code = rule.code.clone();
        match self.countries.entry(code) {
            Entry::Occupied(mut entry) => {
                let sequence = entry.get().sequence;
                debug!("Replacing country {}", entry.key());
                entry.insert(Arc::new(RegisteredCountry { rule, regex, sequence }));
            }
            Entry::Vacant(entry) => {
                let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
                debug!("Registering country {}", entry.key());
                entry.insert(Arc::new(RegisteredCountry { rule, regex, sequence }));
            }
        }
        Ok(())
    }

    fn check_rule(&self, rule: &CountryRule) -> Result<Option<Arc<Regex>>, ValidationError> {
        let invalid = |message: &str| -> Result<Option<Arc<Regex>>, ValidationError> {
            Err(ValidationError::invalid_format(message).with_country_code(rule.code.as_str()))
        };
        if rule.code.trim().is_empty() {
            return invalid("country code must not be empty");
        }
        if rule.prefix.is_empty() {
            return invalid("prefix must not be empty");
        }
        if !rule.prefix.starts_with(PLUS_SIGN) {
            return invalid("prefix must start with +");
        }
        if rule.min_length == 0 || rule.max_length == 0 {
            return invalid("min_length and max_length must be positive");
        }
        if rule.min_length > rule.max_length {
            return invalid("min_length must not exceed max_length");
        }
        if rule.pattern.is_empty() {
            return Ok(None);
        }
        match self.regex_cache.get_regex(&anchored_pattern(&rule.pattern)) {
            Ok(regex) => Ok(Some(regex)),
            Err(err) => Err(ValidationError::invalid_format(format!("invalid pattern: {}", err))
                .with_country_code(rule.code.as_str())),
        }
    }

    /// Removing an absent code is not an error.
    pub fn remove(&self, code: &str) {
        if self.countries.remove(code).is_some() {
            debug!("Removed country {}", code);
        }
    }

    pub fn get(&self, code: &str) -> Option<Arc<RegisteredCountry>> {
        self.countries.get(code).map(|entry| entry.value().clone())
    }

    pub fn lookup(&self, code: &str) -> Option<CountryRule> {
        self.get(code).map(|country| country.rule.clone())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.countries.contains_key(code)
    }

    /// Snapshot of all registered countries in registration order.
    pub fn entries(&self) -> Vec<Arc<RegisteredCountry>> {
        let mut entries: Vec<_> = self
            .countries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|country| country.sequence);
        entries
    }

    pub fn list(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|country| country.rule.code.clone())
            .collect()
    }

    /// Countries whose prefix is exactly `prefix`, e.g. `+7` gives `ru`
    /// and `kz`.
    pub fn codes_sharing_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries()
            .iter()
            .filter(|country| country.rule.prefix == prefix)
            .map(|country| country.rule.code.clone())
            .collect()
    }

    /// Distinct prefixes in registration order.
    pub fn all_prefixes(&self) -> Vec<String> {
        let mut prefixes: Vec<String> = Vec::new();
        for country in self.entries() {
            if !prefixes.contains(&country.rule.prefix) {
                prefixes.push(country.rule.prefix.clone());
            }
        }
        prefixes
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::with_built_in_countries()
    }
}
