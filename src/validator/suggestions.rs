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

use log::trace;

use super::{
    country_registry::CountryRegistry,
    helper_constants::{PLUS_SIGN, SIMILAR_COUNTRY_DISTANCE},
    helper_functions::{levenshtein_distance, push_unique, suggestion_limit},
};
use crate::string_util::extract_digits;

/// Candidate corrections of `phone`, none of them guaranteed to be valid.
///
/// `country_code` must already be normalized. The list is de-duplicated,
/// keeps generation order and holds at most `suggestion_limit(limit)`
/// entries.
pub(super) fn suggest(
    registry: &CountryRegistry,
    phone: &str,
    country_code: &str,
    limit: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !phone.starts_with(PLUS_SIGN) {
        push_unique(&mut suggestions, fast_cat::concat_str!(PLUS_SIGN, phone));
    }

    let digits = extract_digits(phone);

    if let Some(country) = registry.get(country_code) {
        let prefix = country.rule.prefix.as_str();
        let prefix_digits = extract_digits(prefix);
        let suggestion = match digits.strip_prefix(prefix_digits.as_str()) {
            Some(rest) => fast_cat::concat_str!(prefix, rest),
            None => fast_cat::concat_str!(prefix, &digits),
        };
        push_unique(&mut suggestions, suggestion);
    }

    for country in registry.entries() {
        let rule = &country.rule;
        if !(rule.min_length..=rule.max_length).contains(&digits.len()) {
            continue;
        }
        let local = phone.strip_prefix(rule.prefix.as_str()).unwrap_or(phone);
        let local_digits = extract_digits(local);
        let prefix = rule.prefix.as_str();
        push_unique(&mut suggestions, fast_cat::concat_str!(prefix, &local_digits));
    }

    suggestions.truncate(suggestion_limit(limit));
    trace!("Suggestions for {:?}: {:?}", phone, suggestions);
    suggestions
}

/// Registered codes exactly one edit away from the lower-cased `code`,
/// in registration order. The input itself is never returned.
pub(super) fn find_similar_countries(registry: &CountryRegistry, code: &str) -> Vec<String> {
    let code = code.to_lowercase();
    registry
        .list()
        .into_iter()
        .filter(|candidate| levenshtein_distance(&code, candidate) == SIMILAR_COUNTRY_DISTANCE)
        .collect()
}
