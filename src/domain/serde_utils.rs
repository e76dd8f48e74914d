//! Serde utilities for the training data payload.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }
}

/// Reads any scalar as text: strings verbatim, numbers and booleans in their
/// display form, `null` as an empty string. Pair with `#[serde(default)]` so
/// a missing key behaves like `null`.
///
/// # Errors
///
/// Returns an error if the value is an array or an object.
pub fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarTextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use test_case::test_case;

    #[derive(Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "scalar_text")]
        value: String,
    }

    #[test_case(r#"{"value": 7}"#, "7" ; "unsigned")]
    #[test_case(r#"{"value": -3}"#, "-3" ; "negative")]
    #[test_case(r#"{"value": 1.5}"#, "1.5" ; "float")]
    #[test_case(r#"{"value": "a1"}"#, "a1" ; "string_verbatim")]
    #[test_case(r#"{"value": " 7 "}"#, " 7 " ; "string_not_trimmed")]
    #[test_case(r#"{"value": true}"#, "true" ; "boolean")]
    #[test_case(r#"{"value": null}"#, "" ; "null")]
    #[test_case(r"{}", "" ; "missing")]
    fn test_scalar_text(body: &str, expected: &str) {
        let field: Field = serde_json::from_str(body).unwrap();
        assert_eq!(field.value, expected);
    }

    #[test_case(r#"{"value": [1]}"# ; "array")]
    #[test_case(r#"{"value": {"a": 1}}"# ; "object")]
    fn test_non_scalar_rejected(body: &str) {
        assert!(serde_json::from_str::<Field>(body).is_err());
    }
}
