//! Composable validation rules for scalar values.
//!
//! Wrap a value, run any number of rules against it, then read the verdict:
//!
//! ```
//! use isvalid::prelude::*;
//!
//! let mut isbn = wrap("978-0-306-40615-7");
//! assert!(isbn.isbn(IsbnVersion::Thirteen).uppercase().is_valid());
//!
//! let mut code = wrap("abc-123");
//! code.uppercase().isbn_any();
//! assert_eq!(code.errors(), ["Not uppercase", "Not ISBN 10 or 13"]);
//! ```
//!
//! Every rule runs regardless of earlier failures. The only error a rule can
//! return is [`RuleError`], which means the rule itself was called wrongly.

pub use logging;
pub use models::{wrap, AsText, IsbnVersion, RuleError, ValidatableValue};
pub use validators::{
    is_isbn10, is_isbn13, isbn, isbn_any, isbn_with_code, lowercase, normalize_isbn, required,
    uppercase,
};

pub mod prelude {
    pub use crate::{wrap, IntoValidatable, IsbnVersion, RuleError, TextRules, ValidatableValue};
}

/// Fluent form of the text rules. Each method records a failure on the value
/// and hands the value back so the next rule can run.
pub trait TextRules {
    fn isbn(&mut self, version: IsbnVersion) -> &mut Self;
    /// `isbn` with the default version, either ISBN-10 or ISBN-13.
    fn isbn_any(&mut self) -> &mut Self;
    fn uppercase(&mut self) -> &mut Self;
    fn lowercase(&mut self) -> &mut Self;
    fn required(&mut self) -> &mut Self;
}

impl<T: AsText> TextRules for ValidatableValue<T> {
    fn isbn(&mut self, version: IsbnVersion) -> &mut Self {
        validators::isbn(self, version);
        self
    }

    fn isbn_any(&mut self) -> &mut Self {
        validators::isbn_any(self);
        self
    }

    fn uppercase(&mut self) -> &mut Self {
        validators::uppercase(self);
        self
    }

    fn lowercase(&mut self) -> &mut Self {
        validators::lowercase(self);
        self
    }

    fn required(&mut self) -> &mut Self {
        validators::required(self);
        self
    }
}

/// Wrap any value with `value.into_validatable()`.
pub trait IntoValidatable: Sized {
    fn into_validatable(self) -> ValidatableValue<Self> {
        ValidatableValue::new(self)
    }
}

impl<T> IntoValidatable for T {}
