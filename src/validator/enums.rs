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

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Categorizes phone numbers based on their primary use.
#[derive(
    Debug, Default, Display, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PhoneType {
    /// **Mobile numbers.**
    /// Assigned to wireless devices. This is the default classification of a
    /// valid number, since the rule table describes mobile ranges.
    Mobile,
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic location.
    Landline,
    /// **Toll-free numbers.**
    /// The cost of the call is paid by the recipient, e.g. `+1 800`.
    TollFree,
    /// **Premium-rate numbers.**
    /// Charged at a higher rate than normal calls, e.g. `+1 900`.
    Premium,
    /// **Voice over IP (VoIP) numbers.**
    #[strum(serialize = "voip")]
    #[serde(rename = "voip")]
    VoIP,
    /// **Unknown type.**
    /// The number is not valid for any registered country.
    #[default]
    Unknown,
}

/// Kind of a [`ValidationError`](super::errors::ValidationError).
#[derive(
    Debug, Display, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The number does not have the shape required by the country or the
    /// input (country rule, config) itself is malformed.
    InvalidFormat,
    /// Digit count is outside of the country's range.
    InvalidLength,
    /// The number starts with another country's prefix.
    InvalidPrefix,
    /// The country code is not registered.
    UnsupportedCountry,
    /// The number contains characters the configuration does not allow.
    InvalidCharacters,
    /// The configuration requires a leading `+`.
    MissingPlus,
    Unknown,
}

impl ErrorKind {
    /// Stable numeric code for API consumers.
    pub fn error_code(self) -> u16 {
        match self {
            ErrorKind::InvalidFormat => 1001,
            ErrorKind::InvalidLength => 1002,
            ErrorKind::InvalidPrefix => 1003,
            ErrorKind::UnsupportedCountry => 1004,
            ErrorKind::InvalidCharacters => 1005,
            ErrorKind::MissingPlus => 1006,
            ErrorKind::Unknown => 1000,
        }
    }

    /// Whether the user can fix the input and try again.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidFormat | ErrorKind::InvalidCharacters | ErrorKind::MissingPlus
        )
    }

    /// Short human readable description in `lang` ("en", "ru" or "kg").
    /// Unknown languages fall back to English; `Unknown` has no canned
    /// message.
    pub fn localized_message(self, lang: &str) -> Option<&'static str> {
        let (en, ru, kg) = match self {
            ErrorKind::InvalidFormat => (
                "Invalid phone number format",
                "Неверный формат номера телефона",
                "Телефон номерунун форматы туура эмес",
            ),
            ErrorKind::InvalidLength => (
                "Invalid phone number length",
                "Неверная длина номера телефона",
                "Телефон номерунун узундугу туура эмес",
            ),
            ErrorKind::InvalidPrefix => (
                "Invalid country prefix",
                "Неверный код страны",
                "Өлкө коду туура эмес",
            ),
            ErrorKind::UnsupportedCountry => (
                "Unsupported country code",
                "Неподдерживаемый код страны",
                "Колдоого алынбаган өлкө коду",
            ),
            ErrorKind::InvalidCharacters => (
                "Phone number contains invalid characters",
                "Номер содержит недопустимые символы",
                "Номерде жараксыз символдор бар",
            ),
            ErrorKind::MissingPlus => (
                "Phone number must start with + sign",
                "Номер должен начинаться со знака +",
                "Номер + белгиси менен башталышы керек",
            ),
            ErrorKind::Unknown => return None,
        };
        Some(match lang {
            "ru" => ru,
            "kg" => kg,
            _ => en,
        })
    }
}

/// Named validation configurations.
#[derive(Debug, Display, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigPreset {
    /// Strict pattern matching, `+` required, no formatting characters.
    Default,
    /// Same as `Default` but country codes are case sensitive.
    Strict,
    /// Prefix and length checks only, every formatting character allowed.
    Relaxed,
    /// Strict matching that tolerates spaces.
    International,
    /// Lenient matching for locally typed numbers.
    Local,
    /// Machine to machine input: canonical numbers only.
    Api,
}
