use crate::validator::{config::ValidationConfig, country_registry::RegisteredCountry};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the cleaned phone number satisfies the country's rule
    /// under the given configuration.
    fn match_country(
        &self,
        phone: &str,
        country: &RegisteredCountry,
        config: &ValidationConfig,
    ) -> bool;
}
