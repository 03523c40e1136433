mod country_code;

pub use country_code::CountryCode;
