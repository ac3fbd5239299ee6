use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A scalar the backends send either as a JSON string or as a JSON number
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum StringOrNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl StringOrNumber {
    /// `false` for the values a loosely typed client treats as missing: `""` and `0`
    pub fn is_truthy(&self) -> bool {
        match self {
            StringOrNumber::Integer(value) => *value != 0,
            StringOrNumber::Float(value) => *value != 0.0,
            StringOrNumber::Text(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StringOrNumber::Integer(value) => write!(f, "{value}"),
            StringOrNumber::Float(value) => write!(f, "{value}"),
            StringOrNumber::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Returns the first candidate that is present and truthy
pub fn first_truthy<I>(candidates: I) -> Option<StringOrNumber>
where
    I: IntoIterator<Item = Option<StringOrNumber>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(StringOrNumber::is_truthy)
}

/// Returns the first candidate string that is present and not empty
pub fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(|value| value.to_string())
        .unwrap_or_default())
}

pub fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(StringOrNumber::Integer(0), false)]
    #[case(StringOrNumber::Integer(12), true)]
    #[case(StringOrNumber::Float(0.0), false)]
    #[case(StringOrNumber::Text("".to_string()), false)]
    #[case(StringOrNumber::Text("0".to_string()), true)]
    fn test_is_truthy(#[case] value: StringOrNumber, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_first_truthy_skips_falsy_values() {
        assert_eq!(
            first_truthy([
                None,
                Some(StringOrNumber::Integer(0)),
                Some(StringOrNumber::Text("42".to_string())),
                Some(StringOrNumber::Integer(7)),
            ]),
            Some(StringOrNumber::Text("42".to_string()))
        );
    }

    #[rstest]
    fn test_first_non_empty_without_values() {
        assert_eq!(first_non_empty([None, Some("".to_string())]), None);
    }

    #[rstest]
    fn test_integer_display_has_no_decimal_part() {
        let value: StringOrNumber = serde_json::from_str("3").unwrap();
        assert_eq!(value.to_string(), "3");
    }
}
