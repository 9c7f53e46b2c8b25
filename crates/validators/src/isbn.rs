use crate::record_failure;
use lazy_static::lazy_static;
use models::{AsText, IsbnVersion, RuleError, ValidatableValue};
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s-]+").unwrap();
    static ref ISBN10_FORMAT: Regex = Regex::new(r"^[0-9]{9}[0-9X]$").unwrap();
    static ref ISBN13_FORMAT: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

/// Check that the value is an ISBN of the requested version.
///
/// Whitespace and hyphens are ignored. An absent value fails like any other
/// malformed input.
pub fn isbn<T: AsText>(value: &mut ValidatableValue<T>, version: IsbnVersion) -> bool {
    let normalized = value.value().as_text().map(normalize_isbn);

    let (passed, message) = match version {
        IsbnVersion::Any => (
            normalized
                .as_deref()
                .is_some_and(|input| is_isbn10(input) || is_isbn13(input)),
            "Not ISBN 10 or 13",
        ),
        IsbnVersion::Ten => (normalized.as_deref().is_some_and(is_isbn10), "Not ISBN 10"),
        IsbnVersion::Thirteen => (
            normalized.as_deref().is_some_and(is_isbn13),
            "Not ISBN 13",
        ),
    };

    if !passed {
        record_failure(value, "isbn", message);
    }
    value.is_valid()
}

/// [`isbn`] with the default version, accepting either ISBN-10 or ISBN-13.
pub fn isbn_any<T: AsText>(value: &mut ValidatableValue<T>) -> bool {
    isbn(value, IsbnVersion::default())
}

/// Like [`isbn`], but takes the raw version code (0, 10 or 13).
///
/// Any other code is a caller bug: it is returned as an error and the value is
/// left untouched.
pub fn isbn_with_code<T: AsText>(
    value: &mut ValidatableValue<T>,
    code: i32,
) -> Result<bool, RuleError> {
    let version = IsbnVersion::try_from(code).map_err(|e| {
        logging::debug(&e.to_string());
        e
    })?;
    Ok(isbn(value, version))
}

/// Remove all whitespace and hyphen characters.
pub fn normalize_isbn(input: &str) -> String {
    SEPARATORS.replace_all(input, "").into_owned()
}

/// Whether already-normalized input is a valid ISBN-10.
pub fn is_isbn10(input: &str) -> bool {
    if !ISBN10_FORMAT.is_match(input) {
        return false;
    }

    let bytes = input.as_bytes();
    // Positions 1 to 9 are weighted by their position
    let mut checksum: u32 = bytes[..9]
        .iter()
        .zip(1..)
        .map(|(b, weight)| weight * digit(*b))
        .sum();

    checksum += match bytes[9] {
        b'X' => 10 * 10,
        b => 10 * digit(b),
    };

    checksum % 11 == 0
}

/// Whether already-normalized input is a valid ISBN-13.
pub fn is_isbn13(input: &str) -> bool {
    if !ISBN13_FORMAT.is_match(input) {
        return false;
    }

    let bytes = input.as_bytes();
    let checksum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let factor = if i % 2 == 0 { 1 } else { 3 };
            factor * digit(*b)
        })
        .sum();

    digit(bytes[12]) == (10 - checksum % 10) % 10
}

// Callers have already matched the input against an ASCII digit pattern
fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}
