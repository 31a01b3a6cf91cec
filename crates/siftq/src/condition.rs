use crate::{
    filter::{Filter, FilterMap},
    lex::{AND_KEY, OR_KEY},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

///
/// Condition AST
///
/// Canonical output of normalization. Pure and schema-agnostic: no type
/// checking, planning, or execution semantics live here. Later passes
/// (`validate`, an external compiler) interpret the tree.
///

///
/// Cmp
///
/// Comparison vocabulary. Equals is implicit in filter syntax; every other
/// operator carries a `$`-prefixed wire token.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    #[serde(rename = "$eq")]
    Eq,
    #[serde(rename = "$ne")]
    Ne,
    #[serde(rename = "$lt")]
    Lt,
    #[serde(rename = "$lte")]
    Lte,
    #[serde(rename = "$gt")]
    Gt,
    #[serde(rename = "$gte")]
    Gte,
    #[serde(rename = "$not")]
    Not,
    #[serde(rename = "$in")]
    In,
    #[serde(rename = "$nin")]
    NotIn,
}

impl Cmp {
    /// Wire token in filter syntax. Equals has no surface form.
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Eq => None,
            Self::Ne => Some("$ne"),
            Self::Lt => Some("$lt"),
            Self::Lte => Some("$lte"),
            Self::Gt => Some("$gt"),
            Self::Gte => Some("$gte"),
            Self::Not => Some("$not"),
            Self::In => Some("$in"),
            Self::NotIn => Some("$nin"),
        }
    }

    /// Recognize an explicit `$`-prefixed operator token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$ne" => Some(Self::Ne),
            "$lt" => Some(Self::Lt),
            "$lte" => Some(Self::Lte),
            "$gt" => Some(Self::Gt),
            "$gte" => Some(Self::Gte),
            "$not" => Some(Self::Not),
            "$in" => Some(Self::In),
            "$nin" => Some(Self::NotIn),
            _ => None,
        }
    }
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("$eq"))
    }
}

///
/// Clause
///
/// Basic comparison: `field cmp value`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Clause {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl Clause {
    #[must_use]
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.into(),
        }
    }
}

///
/// Condition
///
/// Logical nodes keep their children in caller order; nothing here flattens
/// or reorders. `Raw` carries values the normalizer leaves untouched.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Condition {
    And(Vec<Self>),
    Clause(Clause),
    Or(Vec<Self>),
    Raw(Value),
}

impl Condition {
    /// Single clause: `field cmp value`.
    #[must_use]
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl Into<Value>) -> Self {
        Self::Clause(Clause::new(field, cmp, value))
    }

    #[must_use]
    pub const fn and(children: Vec<Self>) -> Self {
        Self::And(children)
    }

    #[must_use]
    pub const fn or(children: Vec<Self>) -> Self {
        Self::Or(children)
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Gte, value)
    }

    #[must_use]
    pub fn not(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::clause(field, Cmp::Not, value)
    }

    #[must_use]
    pub fn in_iter<I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::clause(field, Cmp::In, Value::list(values))
    }

    #[must_use]
    pub fn not_in_iter<I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::clause(field, Cmp::NotIn, Value::list(values))
    }
}

///
/// Bit Operations
/// allow conditions to be combined with & and |
///

impl BitAnd for Condition {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Condition {
    type Output = Condition;

    fn bitand(self, rhs: Self) -> Self::Output {
        Condition::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Condition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Condition {
    type Output = Condition;

    fn bitor(self, rhs: Self) -> Self::Output {
        Condition::Or(vec![self.clone(), rhs.clone()])
    }
}

///
/// Rendering
///

impl From<Condition> for Filter {
    /// Lower a canonical tree back to filter-value form: implicit equals as
    /// a bare scalar, explicit operators as one-entry token mappings,
    /// logical nodes under their reserved keys. Normalizing the result
    /// reproduces the tree.
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::And(children) => connective_filter(AND_KEY, children),
            Condition::Or(children) => connective_filter(OR_KEY, children),
            Condition::Clause(clause) => {
                let value = match clause.cmp.token() {
                    None => Self::Value(clause.value),
                    Some(token) => {
                        Self::Map(FilterMap::from_iter([(token, Self::Value(clause.value))]))
                    }
                };

                Self::Map(FilterMap::from_iter([(clause.field, value)]))
            }
            Condition::Raw(value) => Self::Value(value),
        }
    }
}

fn connective_filter(key: &str, children: Vec<Condition>) -> Filter {
    let children = children.into_iter().map(Filter::from).collect();

    Filter::Map(FilterMap::from_iter([(key, Filter::Seq(children))]))
}

///
/// TESTS
///
