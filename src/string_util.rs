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

/// Removes every occurrence of the given chars. Returns the borrowed
/// string untouched if none of them is present, so a chain of calls
/// allocates at most once.
pub fn remove_chars<'a>(cow: Cow<'a, str>, chars: &[char]) -> Cow<'a, str> {
    if chars.is_empty() || !cow.contains(chars) {
        return cow;
    }
    Cow::Owned(cow.chars().filter(|c| !chars.contains(c)).collect())
}

/// Keeps only ASCII digits.
pub fn extract_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{count_digits, extract_digits, remove_chars};

    #[test]
    fn remove_chars_borrows_when_untouched() {
        let cleaned = remove_chars(Cow::Borrowed("+996700123456"), &[' ', '-']);
        assert!(matches!(cleaned, Cow::Borrowed(_)));

        let cleaned = remove_chars(Cow::Borrowed("+996 700-123 456"), &[' ', '-']);
        assert_eq!(cleaned, Cow::<str>::Owned("+996700123456".to_owned()));
    }

    #[test]
    fn digits_helpers() {
        assert_eq!(extract_digits("+1 (415) 555-2671"), "14155552671");
        assert_eq!(extract_digits("invalid"), "");
        assert_eq!(count_digits("+7 999 123"), 7);
    }
}
