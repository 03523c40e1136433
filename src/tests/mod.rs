mod batch_tests;
mod config_tests;

use crate::validator::MobileValidator;

static ONCE: std::sync::Once = std::sync::Once::new();

// Every test gets its own validator, the tests mutate configuration and
// registry concurrently.
fn get_validator() -> MobileValidator {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    MobileValidator::new()
}
