use crate::{
    condition::{Clause, Cmp, Condition},
    filter::{Filter, FilterMap},
    lex::{AND_KEY, OR_KEY, lex},
    value::Value,
};

///
/// Normalization
///
/// Rewrites a loosely-structured filter into a canonical condition tree.
///
/// Guarantees:
/// - total: every well-formed filter maps to a tree, nothing fails
/// - connective children keep caller order, never flattened or reordered
/// - entity values reduce to identifying scalars, absent keys to null
/// - sequences under implicit equals become membership tests
/// - re-normalizing a rendered tree is a fixpoint
///

/// Normalize `filter` into a canonical condition tree.
///
/// `default_field` names the field a bare sequence or bare entity at the
/// root applies to.
#[must_use]
pub fn normalize(filter: impl Into<Filter>, default_field: &str) -> Condition {
    normalize_filter(filter.into(), default_field)
}

fn normalize_filter(filter: Filter, default_field: &str) -> Condition {
    match filter {
        Filter::Entity(entity) => Condition::Clause(Clause::new(
            default_field,
            Cmp::Eq,
            entity.into_key(),
        )),
        Filter::Seq(items) => {
            Condition::Clause(Clause::new(default_field, Cmp::In, lower_seq(items)))
        }
        Filter::Map(map) => normalize_map(map, default_field),
        Filter::Value(value) => Condition::Raw(value),
    }
}

fn normalize_map(map: FilterMap, default_field: &str) -> Condition {
    let mut children = Vec::with_capacity(map.len());
    for (key, value) in map {
        children.push(normalize_entry(&key, value, default_field));
    }

    // one entry stands alone; several entries conjoin in insertion order
    if children.len() == 1 {
        children.remove(0)
    } else {
        Condition::And(children)
    }
}

fn normalize_entry(key: &str, value: Filter, default_field: &str) -> Condition {
    match key {
        AND_KEY => Condition::And(normalize_children(value, default_field)),
        OR_KEY => Condition::Or(normalize_children(value, default_field)),
        _ => normalize_field(key, value),
    }
}

/// Connective children normalize independently with order untouched. A
/// non-sequence child is taken as a single-element list.
fn normalize_children(value: Filter, default_field: &str) -> Vec<Condition> {
    match value {
        Filter::Seq(items) => items
            .into_iter()
            .map(|item| normalize_filter(item, default_field))
            .collect(),
        other => vec![normalize_filter(other, default_field)],
    }
}

fn normalize_field(key: &str, value: Filter) -> Condition {
    let (field, cmp) = lex(key);

    let clause = match value {
        // a sequence under implicit equals is a membership test
        Filter::Seq(items) if cmp == Cmp::Eq => Clause::new(field, Cmp::In, lower_seq(items)),
        Filter::Map(map) if cmp == Cmp::Eq => match canonical_entry(map) {
            Ok((op, operand)) => Clause::new(field, op, operand.into_value()),
            Err(map) => Clause::new(field, Cmp::Eq, Filter::Map(map).into_value()),
        },
        other => Clause::new(field, cmp, other.into_value()),
    };

    Condition::Clause(clause)
}

/// A one-entry `{$token: operand}` mapping is an explicit operator in filter
/// syntax; recognizing it keeps already-canonical input stable. Anything
/// else is ordinary data handed back for passthrough.
fn canonical_entry(map: FilterMap) -> Result<(Cmp, Filter), FilterMap> {
    match <[_; 1]>::try_from(map.0) {
        Ok([(token, operand)]) => match Cmp::from_token(&token) {
            Some(cmp) => Ok((cmp, operand)),
            None => Err(FilterMap(vec![(token, operand)])),
        },
        Err(entries) => Err(FilterMap(entries)),
    }
}

fn lower_seq(items: Vec<Filter>) -> Value {
    Value::List(items.into_iter().map(Filter::into_value).collect())
}

///
/// TESTS
///
