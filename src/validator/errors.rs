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

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::ErrorKind;

/// Error returned by registry and config mutators, `format_phone` and
/// `check`. Plain validation failures are reported through
/// [`ValidationResult`](super::types::ValidationResult) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
    /// Offending phone number, empty when the error is not about a number.
    pub phone: String,
    pub country_code: String,
    pub suggestions: Vec<String>,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            phone: String::new(),
            country_code: String::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    pub fn unsupported_country(country_code: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedCountry,
            fast_cat::concat_str!("unsupported country code: ", country_code),
        )
        .with_country_code(country_code)
    }

    pub fn missing_plus(phone: &str) -> Self {
        Self::new(ErrorKind::MissingPlus, "phone number must start with + sign")
            .with_phone(phone)
            .with_suggestions(vec![fast_cat::concat_str!("+", phone)])
    }

    /// The only suggestion is the phone without the offending characters.
    pub fn invalid_characters(phone: &str, invalid_chars: &[char]) -> Self {
        let mut message = String::from("phone number contains invalid characters:");
        for c in invalid_chars {
            // writing into a String can't fail
            let _ = write!(message, " '{}'", c);
        }
        let stripped: String = phone.chars().filter(|c| !invalid_chars.contains(c)).collect();
        Self::new(ErrorKind::InvalidCharacters, message)
            .with_phone(phone)
            .with_suggestions(vec![stripped])
    }

    pub fn invalid_prefix(phone: &str, country_code: &str, expected: &str, actual: &str) -> Self {
        let message = fast_cat::concat_str!(
            "invalid country prefix: expected ",
            expected,
            " for ",
            country_code,
            ", got ",
            actual
        );
        Self::new(ErrorKind::InvalidPrefix, message)
            .with_phone(phone)
            .with_country_code(country_code)
    }

    pub fn invalid_length(
        phone: &str,
        country_code: &str,
        min_length: usize,
        max_length: usize,
        actual: usize,
    ) -> Self {
        let mut min_buf = itoa::Buffer::new();
        let mut max_buf = itoa::Buffer::new();
        let mut actual_buf = itoa::Buffer::new();
        let min = min_buf.format(min_length);
        let max = max_buf.format(max_length);
        let actual = actual_buf.format(actual);
        let message = if min_length == max_length {
            fast_cat::concat_str!(
                "invalid phone number length: expected ",
                min,
                " digits, got ",
                actual
            )
        } else {
            fast_cat::concat_str!(
                "invalid phone number length: expected ",
                min,
                "-",
                max,
                " digits, got ",
                actual
            )
        };
        Self::new(ErrorKind::InvalidLength, message)
            .with_phone(phone)
            .with_country_code(country_code)
    }

    pub fn error_code(&self) -> u16 {
        self.kind.error_code()
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Canned message in `lang`, or the error's own message when the kind
    /// has none.
    pub fn localized_message(&self, lang: &str) -> &str {
        self.kind.localized_message(lang).unwrap_or(&self.message)
    }

    /// Long form used in logs: `[kind] message (Phone: ..) (Country: ..)`.
    pub fn describe(&self) -> String {
        let mut result = format!("[{}] {}", self.kind, self.message);
        if !self.phone.is_empty() {
            let _ = write!(result, " (Phone: {})", self.phone);
        }
        if !self.country_code.is_empty() {
            let _ = write!(result, " (Country: {})", self.country_code);
        }
        if !self.suggestions.is_empty() {
            let _ = write!(result, " (Suggestions: {})", self.suggestions.join(", "));
        }
        result
    }
}
