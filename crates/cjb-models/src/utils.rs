//! Serde helpers for loosely-typed backend payloads.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "null_as_default")]
        title: String,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let form: Form = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(form.title, "");
        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(form.title, "");
        let form: Form = serde_json::from_str(r#"{"title": "Dev"}"#).unwrap();
        assert_eq!(form.title, "Dev");
    }
}
