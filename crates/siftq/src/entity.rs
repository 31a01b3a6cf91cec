use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// EntityIdentity
///
/// The narrow capability a domain type exposes to the normalizer: which
/// field identifies it and the identifying value, if one is assigned.
/// Derivable via `#[derive(Entity)]`.
///

pub trait EntityIdentity {
    /// Name of the primary-key field.
    const PRIMARY_KEY: &'static str;

    /// The identifying value; `None` while the instance has no assigned key.
    fn primary_key(&self) -> Option<Value>;
}

///
/// EntityRef
///
/// What filters keep from an entity: its primary-key field name and its
/// possibly-absent key value. Capturing by value keeps the filter tree
/// `Clone`/`Eq`/serde-friendly with no trait objects inside.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityRef {
    pub primary_key: String,
    pub key: Option<Value>,
}

impl EntityRef {
    #[must_use]
    pub fn new(primary_key: impl Into<String>, key: Option<Value>) -> Self {
        Self {
            primary_key: primary_key.into(),
            key,
        }
    }

    /// Capture the identity of any [`EntityIdentity`] implementor.
    #[must_use]
    pub fn of<E: EntityIdentity>(entity: &E) -> Self {
        Self {
            primary_key: E::PRIMARY_KEY.to_string(),
            key: entity.primary_key(),
        }
    }

    /// Identifying scalar with the absent case made explicit.
    #[must_use]
    pub fn key_or_null(&self) -> Value {
        self.key.clone().unwrap_or(Value::Null)
    }

    /// Owned variant of [`key_or_null`](Self::key_or_null).
    #[must_use]
    pub fn into_key(self) -> Value {
        self.key.unwrap_or(Value::Null)
    }
}

///
/// TESTS
///
