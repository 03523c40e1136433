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

use regex::Regex;

pub trait RegexFullMatch {
    /// Returns true only if the match covers the whole input.
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

/// Wraps a user pattern so that the compiled regex can only match the whole
/// input. Leftmost-first alternation (`7|79`) would otherwise let `find`
/// stop at a shorter match and reject a number the pattern does describe.
pub fn anchored_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchored_pattern, RegexFullMatch};

    #[test]
    fn full_match_requires_whole_input() {
        let regex = Regex::new(r"\+996[0-9]{9}").unwrap();
        assert!(regex.full_match("+996700123456"));
        assert!(!regex.full_match("+9967001234567"));
        assert!(!regex.full_match("x+996700123456"));
    }

    #[test]
    fn anchored_pattern_fixes_alternation() {
        let loose = Regex::new(r"\+7|\+79").unwrap();
        assert!(!loose.full_match("+79"));

        let anchored = Regex::new(&anchored_pattern(r"\+7|\+79")).unwrap();
        assert!(anchored.full_match("+79"));
        assert!(!anchored.full_match("+790"));
    }

    #[test]
    fn anchored_pattern_keeps_existing_anchors_valid() {
        let anchored = Regex::new(&anchored_pattern(r"^\+49[1][5-7][0-9]{8,9}$")).unwrap();
        assert!(anchored.full_match("+4915123456789"));
        assert!(!anchored.full_match("+491512345678901"));
    }
}
