use std::borrow::Cow;

pub struct CountryCode {
}

impl CountryCode {
    /// Returns the code used when no country could be determined.
    pub fn get_unknown() -> &'static str {
        ""
    }

    /// Brings a user supplied country code to the form it is stored under.
    /// Case-insensitive lookups use lower case, which is also the case of the
    /// built-in table.
    pub fn normalize(code: &str, case_sensitive: bool) -> Cow<'_, str> {
        let code = code.trim();
        if case_sensitive || !code.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Borrowed(code)
        } else {
            Cow::Owned(code.to_ascii_lowercase())
        }
    }
}
