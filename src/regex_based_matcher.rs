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

use log::{error, trace};

use super::regex_util::RegexFullMatch;
use crate::{
    interfaces,
    string_util::count_digits,
    validator::{config::ValidationConfig, country_registry::RegisteredCountry, normalizer},
};

pub struct RegexBasedMatcher {}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {}
    }

    /// Lenient mode: byte-exact prefix, then the number of digits after it
    /// must fall into the country's range. Other characters are skipped.
    fn match_prefix_and_length(phone: &str, country: &RegisteredCountry) -> bool {
        let rule = &country.rule;
        let Some(local_number) = phone.strip_prefix(rule.prefix.as_str()) else {
            return false;
        };
        let digits = count_digits(local_number);
        (rule.min_length..=rule.max_length).contains(&digits)
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_country(
        &self,
        phone: &str,
        country: &RegisteredCountry,
        config: &ValidationConfig,
    ) -> bool {
        if !normalizer::format_check(phone, config) {
            trace!("{} failed the format check", phone);
            return false;
        }
        if config.strict_mode {
            match &country.regex {
                Some(regex) => return regex.full_match(phone),
                None if !country.rule.pattern.is_empty() => {
                    // patterns are compiled when the rule is added
                    error!(
                        "Pattern of country {} is not compiled! {}",
                        country.rule.code, country.rule.pattern
                    );
                    return false;
                }
                // no pattern: the prefix and length check is all we have
                None => {}
            }
        }
        Self::match_prefix_and_length(phone, country)
    }
}
