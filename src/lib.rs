mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub mod validator;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use validator::{
    BatchRequest, BatchResult, BatchStats, CacheConfig, ConfigPreset, CountryRule, ErrorKind,
    MobileValidator, PerformanceConfig, PhoneInfo, PhoneType, ValidationConfig, ValidationError,
    ValidationOptions, ValidationResult, MOBILE_VALIDATOR,
};
