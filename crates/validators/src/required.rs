use crate::record_failure;
use models::{AsText, ValidatableValue};

/// Fails on an absent value or on text that is empty or only whitespace.
pub fn required<T: AsText>(value: &mut ValidatableValue<T>) -> bool {
    let present = value
        .value()
        .as_text()
        .is_some_and(|text| !text.trim().is_empty());

    if !present {
        record_failure(value, "required", "Value is required");
    }
    value.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::wrap;

    #[test]
    fn test_required() {
        assert!(required(&mut wrap("x")));
        assert!(required(&mut wrap(Some(String::from(" x ")))));
        assert!(!required(&mut wrap("")));
        assert!(!required(&mut wrap(" \t\n")));

        let mut value = wrap(None::<&str>);
        assert!(!required(&mut value));
        assert_eq!(value.errors(), ["Value is required"]);
    }
}
