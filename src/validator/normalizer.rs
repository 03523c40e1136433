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

use std::borrow::Cow;

use super::{
    config::ValidationConfig,
    helper_constants::{CLOSING_PARENTHESIS, DASH, DOT, OPENING_PARENTHESIS, PLUS_SIGN, SPACE},
};
use crate::string_util::remove_chars;

/// Formatting characters the configuration does not allow.
fn disallowed_formatting_chars(config: &ValidationConfig) -> Vec<char> {
    let mut chars = Vec::with_capacity(5);
    if !config.allow_spaces {
        chars.push(SPACE);
    }
    if !config.allow_dashes {
        chars.push(DASH);
    }
    if !config.allow_parentheses {
        chars.push(OPENING_PARENTHESIS);
        chars.push(CLOSING_PARENTHESIS);
    }
    if !config.allow_dots {
        chars.push(DOT);
    }
    chars
}

fn is_allowed_formatting_char(c: char, config: &ValidationConfig) -> bool {
    match c {
        SPACE => config.allow_spaces,
        DASH => config.allow_dashes,
        OPENING_PARENTHESIS | CLOSING_PARENTHESIS => config.allow_parentheses,
        DOT => config.allow_dots,
        _ => false,
    }
}

/// Removes the formatting characters the configuration does not allow and
/// trims surrounding whitespace. Idempotent.
pub fn clean(phone: &str, config: &ValidationConfig) -> String {
    let cleaned = remove_chars(Cow::Borrowed(phone), &disallowed_formatting_chars(config));
    cleaned.trim().to_owned()
}

/// Checks that the phone consists of an optional leading `+` followed by
/// digits and allowed formatting characters only. A single foreign
/// character rejects the whole number.
pub fn format_check(phone: &str, config: &ValidationConfig) -> bool {
    if phone.is_empty() {
        return false;
    }
    if config.require_plus_sign && !phone.starts_with(PLUS_SIGN) {
        return false;
    }
    let without_plus = phone.strip_prefix(PLUS_SIGN).unwrap_or(phone);
    without_plus
        .chars()
        .all(|c| c.is_ascii_digit() || is_allowed_formatting_char(c, config))
}

/// Distinct characters that make `format_check` fail, in order of first
/// appearance. The leading plus sign is never reported.
pub fn invalid_characters(phone: &str, config: &ValidationConfig) -> Vec<char> {
    let without_plus = phone.strip_prefix(PLUS_SIGN).unwrap_or(phone);
    let mut invalid = Vec::new();
    for c in without_plus.chars() {
        if !c.is_ascii_digit() && !is_allowed_formatting_char(c, config) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}

#[cfg(test)]
mod tests {
    use super::{clean, format_check, invalid_characters};
    use crate::validator::{config::ValidationConfig, ConfigPreset};

    #[test]
    fn clean_removes_only_disallowed_chars() {
        let config = ConfigPreset::International.config();
        assert_eq!(clean(" +996 (700)-123.456 ", &config), "+996 700123456");

        let config = ConfigPreset::Default.config();
        assert_eq!(clean("+996 (700)-123.456", &config), "+996700123456");

        let config = ConfigPreset::Relaxed.config();
        assert_eq!(clean("  +996 (700)-123.456\t", &config), "+996 (700)-123.456");
    }

    #[test]
    fn clean_is_idempotent() {
        let configs = [
            ConfigPreset::Default.config(),
            ConfigPreset::Relaxed.config(),
            ConfigPreset::International.config(),
            ValidationConfig::default().allow_spaces(true).allow_dots(false),
        ];
        let phones = [". +996 700", "+1 (415) 555-2671", "  - 7 . 999 -  ", "", "invalid"];
        for config in &configs {
            for phone in phones {
                let once = clean(phone, config);
                assert_eq!(clean(&once, config), once, "phone {:?} config {:?}", phone, config);
            }
        }
    }

    #[test]
    fn format_check_rules() {
        let default = ConfigPreset::Default.config();
        assert!(format_check("+996700123456", &default));
        assert!(!format_check("", &default));
        assert!(!format_check("996700123456", &default));
        assert!(!format_check("+996 700123456", &default));
        assert!(!format_check("+99670012345a", &default));
        assert!(!format_check("++996700123456", &default));

        let relaxed = ConfigPreset::Relaxed.config();
        assert!(format_check("996700123456", &relaxed));
        assert!(format_check("+996 (700) 123-45.6", &relaxed));
        assert!(!format_check("+996/700/123456", &relaxed));
    }

    #[test]
    fn invalid_characters_are_distinct() {
        let default = ConfigPreset::Default.config();
        assert_eq!(invalid_characters("+996 700 12a3a", &default), vec![' ', 'a']);
        assert!(invalid_characters("+996700123456", &default).is_empty());
    }
}
