//! Custom serde helpers for the provider's wire formats.

/// Deserializes an integer that the backend may send either as a JSON number
/// or as a numeric string (`0` or `"0"`).
pub mod lenient_i64 {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumOrString::deserialize(deserializer)? {
            NumOrString::Num(n) => Ok(n),
            NumOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid integer: {}", s))),
        }
    }
}
