use crate::types::{Float64, Ulid};
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Scalar vocabulary shared by filter leaves and canonical clauses. Anything
/// a clause can compare against is a `Value`; containers appear only as
/// already-lowered operands (a membership list, a passthrough mapping).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    List(Vec<Self>),
    Map(Vec<(String, Self)>),
    Null,
    Text(String),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    /// Build a list operand from anything convertible.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

///
/// Conversions
///
/// One `From` impl per scalar family; `Option` maps its absent case to an
/// explicit `Null` so "missing" never leaks past the conversion boundary.
///

macro_rules! impl_value_from {
    ($variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(Bool: bool);
impl_value_from!(Float: Float64);
impl_value_from!(Int: i8, i16, i32, i64);
impl_value_from!(Text: &str, String);
impl_value_from!(Uint: u8, u16, u32, u64);
impl_value_from!(Ulid: Ulid);

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

///
/// TESTS
///
