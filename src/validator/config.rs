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

use std::time::Duration;

use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::{
    enums::{ConfigPreset, ErrorKind},
    errors::ValidationError,
};

/// Controls normalization and matching of phone numbers.
///
/// The flags are applied in two places: the normalizer removes every
/// formatting character that is *not* allowed, and the format check then
/// rejects any character that is neither a digit nor allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub allow_spaces: bool,
    pub allow_dashes: bool,
    pub allow_parentheses: bool,
    pub allow_dots: bool,
    /// Match the country's regular expression instead of prefix and length.
    pub strict_mode: bool,
    /// Only valid together with `strict_mode`.
    pub require_plus_sign: bool,
    pub case_sensitive_country_code: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ConfigPreset::Default.config()
    }
}

impl ValidationConfig {
    pub fn allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }

    pub fn allow_dashes(mut self, allow: bool) -> Self {
        self.allow_dashes = allow;
        self
    }

    pub fn allow_parentheses(mut self, allow: bool) -> Self {
        self.allow_parentheses = allow;
        self
    }

    pub fn allow_dots(mut self, allow: bool) -> Self {
        self.allow_dots = allow;
        self
    }

    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    pub fn require_plus_sign(mut self, require: bool) -> Self {
        self.require_plus_sign = require;
        self
    }

    pub fn case_sensitive_country_code(mut self, sensitive: bool) -> Self {
        self.case_sensitive_country_code = sensitive;
        self
    }

    /// Checks flag combinations that contradict each other.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.require_plus_sign && !self.strict_mode {
            return Err(ValidationError::invalid_format(
                "require_plus_sign can only be true when strict_mode is enabled",
            ));
        }
        Ok(())
    }
}

impl ConfigPreset {
    pub fn config(self) -> ValidationConfig {
        let (spaces, dashes, parentheses, dots, strict, plus, case_sensitive) = match self {
            ConfigPreset::Default => (false, false, false, false, true, true, false),
            ConfigPreset::Strict => (false, false, false, false, true, true, true),
            ConfigPreset::Relaxed => (true, true, true, true, false, false, false),
            ConfigPreset::International => (true, false, false, false, true, true, false),
            ConfigPreset::Local => (true, true, true, true, false, false, false),
            ConfigPreset::Api => (false, false, false, false, true, true, false),
        };
        ValidationConfig {
            allow_spaces: spaces,
            allow_dashes: dashes,
            allow_parentheses: parentheses,
            allow_dots: dots,
            strict_mode: strict,
            require_plus_sign: plus,
            case_sensitive_country_code: case_sensitive,
        }
    }
}

/// Execution limits. `validation_timeout` is declared for API compatibility
/// and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceConfig {
    pub enable_profiling: bool,
    /// Upper bound of the workers a batch may use.
    pub max_concurrent_validations: usize,
    pub validation_timeout: Duration,
    pub enable_metrics: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enable_profiling: false,
            max_concurrent_validations: 100,
            validation_timeout: Duration::from_millis(100),
            enable_metrics: false,
        }
    }
}

/// Result cache settings. Reserved: validation results are not cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    pub max_size: usize,
    pub ttl: Duration,
    pub cleanup_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_size: 10_000,
            ttl: Duration::from_secs(3600),
            cleanup_interval: Duration::from_secs(300),
        }
    }
}

/// Holds the current configuration. Readers always get a copy, so a
/// validation never sees a half-applied change.
pub struct ConfigStore {
    current: RwLock<ValidationConfig>,
    performance: RwLock<PerformanceConfig>,
    cache: RwLock<CacheConfig>,
}

impl ConfigStore {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            current: RwLock::new(config),
            performance: RwLock::new(PerformanceConfig::default()),
            cache: RwLock::new(CacheConfig::default()),
        }
    }

    pub fn get(&self) -> ValidationConfig {
        *self.current.read()
    }

    pub fn set(&self, config: ValidationConfig) -> Result<(), ValidationError> {
        if let Err(err) = config.validate() {
            warn!("Rejected configuration {:?}: {}", config, err);
            return Err(err);
        }
        *self.current.write() = config;
        debug!("Configuration set to {:?}", config);
        Ok(())
    }

    pub fn reset(&self) {
        *self.current.write() = ConfigPreset::Default.config();
    }

    pub fn preset_config(name: &str) -> Option<ValidationConfig> {
        name.parse::<ConfigPreset>().ok().map(ConfigPreset::config)
    }

    pub fn apply_preset(&self, name: &str) -> Result<(), ValidationError> {
        let Some(config) = Self::preset_config(name) else {
            warn!("Unknown configuration preset: {}", name);
            return Err(ValidationError::new(
                ErrorKind::Unknown,
                fast_cat::concat_str!("unknown configuration preset: ", name),
            ));
        };
        self.set(config)
    }

    pub fn list_presets() -> Vec<&'static str> {
        ConfigPreset::iter().map(<&'static str>::from).collect()
    }

    pub fn performance(&self) -> PerformanceConfig {
        *self.performance.read()
    }

    pub fn set_performance(&self, config: PerformanceConfig) {
        *self.performance.write() = config;
    }

    pub fn cache(&self) -> CacheConfig {
        *self.cache.read()
    }

    pub fn set_cache(&self, config: CacheConfig) {
        *self.cache.write() = config;
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
