use std::fmt::Display;

use crate::constraints::ConstraintId;
use crate::variables::VariableId;

/// The outcome of a propagator invocation; either the network is still consistent or a
/// [`Deadend`] was found.
pub type PropagationStatus = Result<(), Deadend>;

/// The reason why a propagator reported that the current partial assignment cannot be extended to
/// a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deadend {
    /// Propagation removed every value from the current domain of the variable.
    EmptyDomain(VariableId),
    /// A constraint whose scope is fully assigned is not satisfied by the assigned values.
    ViolatedConstraint(ConstraintId),
}

impl Display for Deadend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deadend::EmptyDomain(variable) => write!(f, "the domain of {variable} is empty"),
            Deadend::ViolatedConstraint(constraint) => write!(f, "{constraint} is violated"),
        }
    }
}

/// A value which was removed from the current domain of a variable by a propagator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrunedValue {
    pub variable: VariableId,
    pub value: i32,
}

/// What a propagator hands back to the search: whether it detected a [`Deadend`], together with
/// every value it pruned during the call.
///
/// The prunings have already been applied to the network when this is returned. The caller owns
/// the prune list and is responsible for restoring it (see [`Csp::restore`]) before it tries
/// another value or backtracks, regardless of the status.
///
/// [`Csp::restore`]: crate::Csp::restore
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationResult {
    pub status: PropagationStatus,
    pub pruned: Vec<PrunedValue>,
}

impl Default for PropagationResult {
    fn default() -> Self {
        PropagationResult {
            status: Ok(()),
            pruned: vec![],
        }
    }
}

impl PropagationResult {
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }

    pub fn is_deadend(&self) -> bool {
        self.status.is_err()
    }
}
