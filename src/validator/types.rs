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

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use super::{config::ValidationConfig, enums::PhoneType};

/// Phone format of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    /// Registry key, e.g. `kg`.
    pub code: String,
    /// International prefix including the plus sign, e.g. `+996`.
    pub prefix: String,
    /// Regular expression used in strict mode. May be empty, in which case
    /// strict mode falls back to the prefix and length check.
    pub pattern: String,
    /// Bounds of the digit count after the prefix.
    pub min_length: usize,
    pub max_length: usize,
    pub country_name: String,
    pub description: String,
}

impl CountryRule {
    pub fn new(
        code: impl Into<String>,
        prefix: impl Into<String>,
        pattern: impl Into<String>,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            code: code.into(),
            prefix: prefix.into(),
            pattern: pattern.into(),
            min_length,
            max_length,
            country_name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_country_name(mut self, country_name: impl Into<String>) -> Self {
        self.country_name = country_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Outcome of a single validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_number: String,
    pub original_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub(super) fn invalid(
        original_number: &str,
        country_code: &str,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            is_valid: false,
            country_code: country_code.to_owned(),
            original_number: original_number.to_owned(),
            error_message: error_message.into(),
            ..Default::default()
        }
    }
}

/// Details about a number, derived from the first country it is valid for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneInfo {
    pub number: String,
    pub country_code: String,
    pub country_name: String,
    pub prefix: String,
    pub local_number: String,
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

/// Per call knobs of
/// [`MobileValidator::validate_with_options`](super::MobileValidator::validate_with_options).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Used instead of the store's configuration for this call only.
    pub config: Option<ValidationConfig>,
    /// Country assumed when the call does not name one. Detection is used
    /// when this is empty as well.
    pub expected_country: String,
    /// When not empty, only these countries may validate.
    pub allowed_countries: Vec<String>,
    pub forbidden_countries: Vec<String>,
    pub return_suggestions: bool,
    /// Caps the suggestion list; zero means the default cap of five.
    pub max_suggestions: usize,
}

impl ValidationOptions {
    pub fn with_suggestions(max_suggestions: usize) -> Self {
        Self {
            return_suggestions: true,
            max_suggestions,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
    pub phones: Vec<String>,
    /// Non-positive values select the default of ten workers.
    pub parallelism: i32,
    pub options: Option<ValidationOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Validations that did not complete normally.
    pub errors: usize,
    /// Valid results per resolved country code.
    pub by_country: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// `results[i]` belongs to the i-th input phone.
    pub results: Vec<ValidationResult>,
    pub stats: BatchStats,
    pub processing_time: Duration,
}
