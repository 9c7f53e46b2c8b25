use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// A candidate value paired with the messages of every rule it failed.
///
/// Rules only ever append to `errors`, so once a value turns invalid it stays
/// invalid for the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatableValue<T> {
    value: T,
    errors: Vec<String>,
}

impl<T> ValidatableValue<T> {
    pub fn new(value: T) -> Self {
        ValidatableValue {
            value,
            errors: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Failure messages in the order the rules ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume the wrapper, yielding the value when valid or every recorded
    /// message otherwise.
    pub fn into_result(self) -> Result<T, Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

impl<T> From<T> for ValidatableValue<T> {
    fn from(value: T) -> Self {
        ValidatableValue::new(value)
    }
}

impl<T: Serialize> Serialize for ValidatableValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidatableValue", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.end()
    }
}

/// Wrap a raw value so rules can be run against it.
pub fn wrap<T>(value: T) -> ValidatableValue<T> {
    ValidatableValue::new(value)
}

/// Text view of a wrapped value. `None` stands for an absent value.
pub trait AsText {
    fn as_text(&self) -> Option<&str>;
}

impl AsText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsText for &str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl AsText for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl AsText for Option<&str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

/// Misuse of the rule API. Never produced for bad input data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Isbn version {0} is not supported.")]
    UnsupportedIsbnVersion(i32),

    #[error("Isbn version '{0}' is not supported. Valid values are: any, 10, 13")]
    UnknownIsbnVersion(String),
}

// ISBN rule parameters
pub mod isbn {
    use super::RuleError;
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// Which ISBN format the `isbn` rule accepts.
    ///
    /// Canonical text is `any`, `10` and `13`, both for `Display` and serde.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum IsbnVersion {
        /// Either ISBN-10 or ISBN-13
        #[default]
        #[serde(rename = "any")]
        Any,
        #[serde(rename = "10", alias = "ten")]
        Ten,
        #[serde(rename = "13", alias = "thirteen")]
        Thirteen,
    }

    impl TryFrom<i32> for IsbnVersion {
        type Error = RuleError;

        fn try_from(code: i32) -> Result<Self, Self::Error> {
            match code {
                0 => Ok(IsbnVersion::Any),
                10 => Ok(IsbnVersion::Ten),
                13 => Ok(IsbnVersion::Thirteen),
                other => Err(RuleError::UnsupportedIsbnVersion(other)),
            }
        }
    }

    impl FromStr for IsbnVersion {
        type Err = RuleError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "any" => Ok(IsbnVersion::Any),
                "10" | "ten" => Ok(IsbnVersion::Ten),
                "13" | "thirteen" => Ok(IsbnVersion::Thirteen),
                _ => Err(RuleError::UnknownIsbnVersion(s.to_string())),
            }
        }
    }

    impl fmt::Display for IsbnVersion {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                IsbnVersion::Any => write!(f, "any"),
                IsbnVersion::Ten => write!(f, "10"),
                IsbnVersion::Thirteen => write!(f, "13"),
            }
        }
    }
}

pub use isbn::IsbnVersion;
