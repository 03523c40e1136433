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

use super::{enums::PhoneType, helper_constants::MAX_SUGGESTIONS};

/// Classic Levenshtein distance: insertion, deletion and substitution all
/// cost one. The whole table is filled, there is no early exit.
pub(super) fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let (m, n) = (source.len(), target.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix[m][n]
}

/// Very small per country table. Anything not listed is a mobile number,
/// the built-in rules only describe mobile ranges.
pub(super) fn detect_phone_type(phone: &str, country_code: &str) -> PhoneType {
    match country_code {
        "us" | "ca" => {
            if ["+1800", "+1888", "+1877", "+1866"]
                .iter()
                .any(|prefix| phone.starts_with(prefix))
            {
                return PhoneType::TollFree;
            }
            if phone.starts_with("+1900") {
                return PhoneType::Premium;
            }
        }
        "uk" => {
            if phone.starts_with("+447") {
                return PhoneType::Mobile;
            }
            if phone.starts_with("+44800") {
                return PhoneType::TollFree;
            }
        }
        _ => {}
    }
    PhoneType::Mobile
}

/// Appends the suggestion unless it is already present.
pub(super) fn push_unique(suggestions: &mut Vec<String>, suggestion: String) {
    if !suggestions.contains(&suggestion) {
        suggestions.push(suggestion);
    }
}

/// Effective length of a suggestion list: `max` if positive, never more
/// than the hard cap.
pub(super) fn suggestion_limit(max: usize) -> usize {
    if max == 0 {
        MAX_SUGGESTIONS
    } else {
        max.min(MAX_SUGGESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_phone_type, levenshtein_distance, suggestion_limit};
    use crate::validator::enums::PhoneType;

    #[test]
    fn levenshtein() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("kg", ""), 2);
        assert_eq!(levenshtein_distance("", "kg"), 2);
        assert_eq!(levenshtein_distance("kg", "kg"), 0);
        assert_eq!(levenshtein_distance("kg", "kz"), 1);
        assert_eq!(levenshtein_distance("kg", "k"), 1);
        assert_eq!(levenshtein_distance("kg", "gk"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn phone_types() {
        assert_eq!(detect_phone_type("+18005551234", "us"), PhoneType::TollFree);
        assert_eq!(detect_phone_type("+18665551234", "ca"), PhoneType::TollFree);
        assert_eq!(detect_phone_type("+19005551234", "us"), PhoneType::Premium);
        assert_eq!(detect_phone_type("+14155552671", "us"), PhoneType::Mobile);
        assert_eq!(detect_phone_type("+447911123456", "uk"), PhoneType::Mobile);
        assert_eq!(detect_phone_type("+448001234567", "uk"), PhoneType::TollFree);
        assert_eq!(detect_phone_type("+18005551234", "kg"), PhoneType::Mobile);
    }

    #[test]
    fn suggestion_limits() {
        assert_eq!(suggestion_limit(0), 5);
        assert_eq!(suggestion_limit(3), 3);
        assert_eq!(suggestion_limit(10), 5);
    }
}
