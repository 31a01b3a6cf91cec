use crate::{
    filter::{Filter, FilterMap},
    value::Value,
};

///
/// Coercion
///
/// Flattens entity references out of a filter ahead of normalization. A
/// bare entity at the root becomes a one-entry mapping on its primary key;
/// entities nested inside mappings or sequences reduce to their identifying
/// scalar. The shape of everything else is preserved, so coercing twice is
/// the same as coercing once.
///

/// Replace every entity reference in `params` with plain filter structure.
#[must_use]
pub fn coerce(params: impl Into<Filter>) -> Filter {
    match params.into() {
        Filter::Entity(entity) => Filter::Map(FilterMap(vec![(
            entity.primary_key,
            Filter::Value(entity.key.unwrap_or(Value::Null)),
        )])),
        other => coerce_member(other),
    }
}

fn coerce_member(filter: Filter) -> Filter {
    match filter {
        Filter::Entity(entity) => Filter::Value(entity.into_key()),
        Filter::Map(map) => Filter::Map(
            map.into_iter()
                .map(|(key, value)| (key, coerce_member(value)))
                .collect(),
        ),
        Filter::Seq(items) => Filter::Seq(items.into_iter().map(coerce_member).collect()),
        other @ Filter::Value(_) => other,
    }
}

///
/// TESTS
///
