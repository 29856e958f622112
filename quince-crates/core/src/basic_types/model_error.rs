use thiserror::Error;

use crate::variables::VariableId;

/// Errors which can occur while a model builder creates the variables and constraints of a
/// [`Csp`](crate::Csp).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Variable '{0}' was created with an empty domain")]
    EmptyDomain(String),
    #[error("Constraint '{0}' has an empty scope")]
    EmptyScope(String),
    #[error("Constraint '{constraint}' refers to {variable}, which does not belong to this network")]
    UnknownVariable {
        constraint: String,
        variable: VariableId,
    },
    #[error("Constraint '{constraint}' contains {variable} more than once in its scope")]
    DuplicateScopeVariable {
        constraint: String,
        variable: VariableId,
    },
    #[error("Constraint '{constraint}' has arity {arity}, but a tuple of length {length} was provided")]
    TupleArityMismatch {
        constraint: String,
        arity: usize,
        length: usize,
    },
    #[error("Constraint '{constraint}' has a tuple with value {value} for {variable}, which is not in its domain")]
    ValueOutsideDomain {
        constraint: String,
        variable: VariableId,
        value: i32,
    },
}
