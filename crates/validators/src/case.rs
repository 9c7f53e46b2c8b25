use crate::record_failure;
use models::{AsText, ValidatableValue};

/// Fails only when the value contains a lowercase letter. Digits, punctuation,
/// empty strings and absent values pass.
pub fn uppercase<T: AsText>(value: &mut ValidatableValue<T>) -> bool {
    let has_lowercase = value
        .value()
        .as_text()
        .is_some_and(|text| text.chars().any(char::is_lowercase));

    if has_lowercase {
        record_failure(value, "uppercase", "Not uppercase");
    }
    value.is_valid()
}

/// Fails only when the value contains an uppercase letter.
pub fn lowercase<T: AsText>(value: &mut ValidatableValue<T>) -> bool {
    let has_uppercase = value
        .value()
        .as_text()
        .is_some_and(|text| text.chars().any(char::is_uppercase));

    if has_uppercase {
        record_failure(value, "lowercase", "Not lowercase");
    }
    value.is_valid()
}
