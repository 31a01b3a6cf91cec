use crate::{
    entity::{EntityIdentity, EntityRef},
    types::{Float64, Ulid},
    value::Value,
};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Filter
///
/// Loosely-structured filter input as a closed union. Callers hand one of
/// these to `normalize`; nothing here carries meaning yet, shapes do:
///
/// - `Value`: a scalar leaf (an already-lowered operand stays scalar)
/// - `Seq`: an ordered sequence, rewritten to membership where it counts
/// - `Map`: insertion-ordered entries of field keys, shorthand keys, or
///   reserved connective keys
/// - `Entity`: a captured domain-object identity
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Filter {
    Entity(EntityRef),
    Map(FilterMap),
    Seq(Vec<Self>),
    Value(Value),
}

impl Filter {
    /// Capture an entity's identity as a filter value.
    #[must_use]
    pub fn entity<E: EntityIdentity>(entity: &E) -> Self {
        Self::Entity(EntityRef::of(entity))
    }

    #[must_use]
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(entries.into_iter().collect())
    }

    /// Lower to a scalar operand: entities reduce to their identifying
    /// scalar (absent keys to null), sequences and mappings lower
    /// structurally.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Entity(entity) => entity.into_key(),
            Self::Map(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect(),
            ),
            Self::Seq(items) => Value::List(items.into_iter().map(Self::into_value).collect()),
            Self::Value(value) => value,
        }
    }
}

///
/// FilterMap
///
/// Insertion-ordered string-keyed entries. Key order carries caller intent
/// (connective children, clause sequence) and survives normalization
/// untouched, so this is a pair list rather than a sorted map.
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct FilterMap(#[into_iterator(owned, ref)] pub Vec<(String, Filter)>);

impl FilterMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry, keeping insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Filter>) {
        self.0.push((key.into(), value.into()));
    }

    /// Chainable [`insert`](Self::insert).
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Filter>) -> Self {
        self.insert(key, value);
        self
    }

    /// First value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Filter> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<K: Into<String>, V: Into<Filter>> FromIterator<(K, V)> for FilterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

///
/// Conversions
///

macro_rules! impl_filter_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Filter {
                fn from(v: $ty) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
    };
}

impl_filter_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, &str, String, Float64, Ulid);

impl From<Value> for Filter {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<EntityRef> for Filter {
    fn from(entity: EntityRef) -> Self {
        Self::Entity(entity)
    }
}

impl From<FilterMap> for Filter {
    fn from(map: FilterMap) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Filter {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Filter {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Value(Value::Null), Into::into)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_entries_keep_insertion_order() {
        let map = FilterMap::new()
            .entry("z", 1)
            .entry("a", 2)
            .entry("z", 3);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "z"]);
        assert_eq!(map.get("z"), Some(&Filter::Value(Value::Int(1))));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn absent_option_lowers_to_null() {
        assert_eq!(Filter::from(None::<u64>), Filter::Value(Value::Null));
        assert_eq!(Filter::from(Some(4u64)), Filter::Value(Value::Uint(4)));
    }

    #[test]
    fn into_value_reduces_entities_everywhere() {
        let filter = Filter::map([
            ("who", Filter::Entity(EntityRef::new("id", Some(Value::Uint(7))))),
            ("tags", Filter::seq(["a", "b"])),
            ("empty", Filter::Entity(EntityRef::new("id", None))),
        ]);

        assert_eq!(
            filter.into_value(),
            Value::Map(vec![
                ("who".to_string(), Value::Uint(7)),
                ("tags".to_string(), Value::list(["a", "b"])),
                ("empty".to_string(), Value::Null),
            ])
        );
    }

    #[test]
    fn sequences_lower_elementwise() {
        let filter = Filter::seq([
            Filter::from(1),
            Filter::Entity(EntityRef::new("id", Some(Value::Uint(2)))),
        ]);

        assert_eq!(
            filter.into_value(),
            Value::List(vec![Value::Int(1), Value::Uint(2)])
        );
    }
}
