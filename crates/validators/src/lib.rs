// validators crate

mod case;
mod isbn;
mod required;


pub use case::{lowercase, uppercase};
pub use isbn::{is_isbn10, is_isbn13, isbn, isbn_any, isbn_with_code, normalize_isbn};
pub use required::required;

use models::ValidatableValue;

/// Record a failed rule on the value and trace it.
pub(crate) fn record_failure<T>(value: &mut ValidatableValue<T>, rule: &str, message: &str) {
    logging::debug(&format!("Rule '{}' failed: {}", rule, message));
    value.add_error(message);
}
