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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled country patterns keyed by their source string. Several countries
/// share a pattern (US and Canada for example), so each distinct pattern is
/// compiled once and handed out as `Arc`.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn shares_compiled_patterns() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"^\+1[2-9][0-9]{9}$").unwrap();
        let second = cache.get_regex(r"^\+1[2-9][0-9]{9}$").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn rejects_broken_pattern() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex(r"^\+1[0-9").is_err());
        // a failed compilation is not cached
        assert!(cache.get_regex(r"^\+1[0-9").is_err());
    }
}
