//! Filter normalization for query engines: shorthand operator lexing,
//! entity coercion, canonical condition trees, and the ergonomics exported
//! via the `prelude`.
#![warn(unreachable_pub)]

extern crate self as siftq;

// public exports are one module level down
pub mod coerce;
pub mod condition;
pub mod entity;
pub mod filter;
pub mod lex;
pub mod naming;
pub mod normalize;
pub mod types;
pub mod validate;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use siftq_derive::Entity;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, naming strategies, or lexer internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        Entity,
        coerce::coerce,
        condition::{Clause, Cmp, Condition},
        entity::{EntityIdentity, EntityRef},
        filter::{Filter, FilterMap},
        normalize::normalize,
        validate::validate,
        value::Value,
    };
}
