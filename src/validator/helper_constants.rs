pub const PLUS_SIGN: &'static str = "+";
pub const SPACE: char = ' ';
pub const DASH: char = '-';
pub const OPENING_PARENTHESIS: char = '(';
pub const CLOSING_PARENTHESIS: char = ')';
pub const DOT: char = '.';

/// Hard cap of the suggestion list, whatever the caller asks for.
pub const MAX_SUGGESTIONS: usize = 5;
/// Used when a batch request does not ask for a positive parallelism.
pub const DEFAULT_PARALLELISM: usize = 10;
/// Similar country codes are exactly this many edits away from the input.
pub const SIMILAR_COUNTRY_DISTANCE: usize = 1;
/// Expected number of registered countries, used to presize maps.
pub const REGISTRY_CAPACITY: usize = 64;

pub const INVALID_FORMAT_MESSAGE: &'static str = "invalid phone number format";
pub const INVALID_FOR_COUNTRY_MESSAGE: &'static str = "invalid phone number for country ";
pub const UNDETECTED_COUNTRY_MESSAGE: &'static str = "cannot determine country for phone number";
pub const INTERNAL_ERROR_MESSAGE: &'static str = "internal validation error";
