use crate::{
    condition::{Clause, Cmp, Condition},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// Validation
///
/// Structural checks over a canonical condition tree. Normalization is
/// total by design, so shapes that cannot execute sensibly are reported
/// here instead of failing earlier.
///

///
/// ValidateError
///

#[derive(Clone, Debug, ThisError, Eq, PartialEq)]
pub enum ValidateError {
    #[error("clause has an empty field name")]
    EmptyField,

    #[error("membership operator {cmp} on field '{field}' expects a list operand")]
    MembershipOperand { field: String, cmp: Cmp },

    #[error("ordering operator {cmp} on field '{field}' cannot compare a {shape}")]
    OrderingOperand {
        field: String,
        cmp: Cmp,
        shape: &'static str,
    },
}

/// Check every clause of `condition`, depth first.
pub fn validate(condition: &Condition) -> Result<(), ValidateError> {
    match condition {
        Condition::And(children) | Condition::Or(children) => {
            children.iter().try_for_each(validate)
        }
        Condition::Clause(clause) => validate_clause(clause),
        Condition::Raw(_) => Ok(()),
    }
}

fn validate_clause(clause: &Clause) -> Result<(), ValidateError> {
    if clause.field.is_empty() {
        return Err(ValidateError::EmptyField);
    }

    match clause.cmp {
        Cmp::In | Cmp::NotIn => match clause.value {
            Value::List(_) => Ok(()),
            _ => Err(membership_operand(clause)),
        },
        Cmp::Gt | Cmp::Gte | Cmp::Lt | Cmp::Lte => match clause.value {
            Value::List(_) => Err(ordering_operand(clause, "list")),
            Value::Map(_) => Err(ordering_operand(clause, "map")),
            _ => Ok(()),
        },
        Cmp::Eq | Cmp::Ne | Cmp::Not => Ok(()),
    }
}

fn membership_operand(clause: &Clause) -> ValidateError {
    ValidateError::MembershipOperand {
        field: clause.field.clone(),
        cmp: clause.cmp,
    }
}

fn ordering_operand(clause: &Clause, shape: &'static str) -> ValidateError {
    ValidateError::OrderingOperand {
        field: clause.field.clone(),
        cmp: clause.cmp,
        shape,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_trees_pass() {
        let cond = Condition::And(vec![
            Condition::eq("a", 1),
            Condition::gt("b", 2),
            Condition::in_iter("c", [1, 2]),
            Condition::Raw(Value::Int(5)),
        ]);

        assert_eq!(validate(&cond), Ok(()));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let cond = Condition::eq("", 1);
        assert_eq!(validate(&cond), Err(ValidateError::EmptyField));
    }

    #[test]
    fn membership_needs_a_list() {
        let cond = Condition::clause("key", Cmp::In, 5);
        assert_eq!(
            validate(&cond),
            Err(ValidateError::MembershipOperand {
                field: "key".to_string(),
                cmp: Cmp::In,
            })
        );
    }

    #[test]
    fn ordering_rejects_structured_operands() {
        let cond = Condition::clause("key", Cmp::Lt, Value::List(vec![Value::Int(1)]));
        assert_eq!(
            validate(&cond),
            Err(ValidateError::OrderingOperand {
                field: "key".to_string(),
                cmp: Cmp::Lt,
                shape: "list",
            })
        );
    }

    #[test]
    fn errors_surface_from_nested_children() {
        let cond = Condition::Or(vec![
            Condition::eq("a", 1),
            Condition::And(vec![Condition::eq("", 2)]),
        ]);

        assert_eq!(validate(&cond), Err(ValidateError::EmptyField));
    }
}
