mod batch;
mod countries;
mod helper_constants;
mod helper_functions;
mod mobile_validator;
mod suggestions;
pub mod config;
pub mod country_registry;
pub mod enums;
pub mod errors;
pub mod normalizer;
pub mod types;

use std::sync::LazyLock;

pub use config::{CacheConfig, ConfigStore, PerformanceConfig, ValidationConfig};
pub use country_registry::CountryRegistry;
pub use enums::{ConfigPreset, ErrorKind, PhoneType};
pub use errors::ValidationError;
pub use mobile_validator::MobileValidator;
pub use types::{
    BatchRequest, BatchResult, BatchStats, CountryRule, PhoneInfo, ValidationOptions,
    ValidationResult,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Process wide validator seeded with the built-in countries.
pub static MOBILE_VALIDATOR: LazyLock<MobileValidator> = LazyLock::new(|| {
    MobileValidator::new()
});
