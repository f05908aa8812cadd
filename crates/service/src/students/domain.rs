use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// A student record as stored and as rendered on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "full_name")]
    pub name: String,
    pub age: i64,
}

/// Create/update payload. Missing or `null` fields fall back to their zero
/// values; any client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentInput {
    #[serde(default, rename = "full_name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StudentInput {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self { name: name.into(), age }
    }
}

/// Records present at process startup.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student { id: 1, name: "Joao".into(), age: 18 },
        Student { id: 2, name: "Gabriel".into(), age: 19 },
    ]
}

/// Parse an id path token. Signs are accepted; anything else non-numeric is `BadInput`.
pub fn parse_id(token: &str) -> Result<i64, ServiceError> {
    token
        .parse::<i64>()
        .map_err(|e| ServiceError::BadInput(format!("invalid id `{}`: {}", token, e)))
}
