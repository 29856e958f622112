//! Constraint propagation: the strategies which prune the current domains of a [`Csp`] after a
//! variable has been assigned.
//!
//! Every strategy follows the same contract:
//! - When called without a triggering variable, it performs its preprocessing over the entire
//!   network before any variable is assigned.
//! - When called with a triggering variable, that variable has just been assigned and only the
//!   constraints containing it are used as a starting point.
//! - Prunings are applied to the network immediately and returned in a [`PropagationResult`]
//!   together with whether a [`Deadend`](crate::basic_types::Deadend) was detected. A value is
//!   pruned at most once per call and only if it is present.
//! - The caller restores the returned prunings (see [`Csp::restore`]); the propagators never
//!   undo anything themselves and keep no state between calls.
mod constraint_queue;
mod forward_checking;
mod generalised_arc_consistency;
mod no_propagation;
#[cfg(test)]
pub(crate) mod test_network;

use std::fmt::Display;

use itertools::Itertools;
use log::trace;

pub(crate) use constraint_queue::ConstraintQueue;
pub use forward_checking::propagate_forward_check;
pub use generalised_arc_consistency::propagate_gac;
pub use no_propagation::propagate_none;

use crate::basic_types::PropagationResult;
use crate::basic_types::PropagationStatus;
use crate::basic_types::PrunedValue;
use crate::quince_asserts::quince_assert_advanced;
use crate::quince_asserts::quince_assert_simple;
use crate::variables::DomainStore;
use crate::variables::VariableId;
use crate::variables::Variables;
use crate::Csp;

/// The propagation strategy used by the search; selected once per search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagationMethod {
    /// Only checks constraints whose scope is fully assigned; never prunes.
    PlainBacktracking,
    /// Prunes the last unassigned variable of every constraint containing the assigned variable.
    ForwardChecking,
    /// Maintains generalised arc consistency over the constraints affected by the assignment.
    #[default]
    GeneralisedArcConsistency,
}

impl PropagationMethod {
    pub fn propagate(self, csp: &mut Csp, new_var: Option<VariableId>) -> PropagationResult {
        match self {
            PropagationMethod::PlainBacktracking => propagate_none(csp, new_var),
            PropagationMethod::ForwardChecking => propagate_forward_check(csp, new_var),
            PropagationMethod::GeneralisedArcConsistency => propagate_gac(csp, new_var),
        }
    }
}

impl Display for PropagationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationMethod::PlainBacktracking => write!(f, "BT"),
            PropagationMethod::ForwardChecking => write!(f, "FC"),
            PropagationMethod::GeneralisedArcConsistency => write!(f, "GAC"),
        }
    }
}

/// Runs `propagator` with a fresh prune list and checks the contract on its result.
fn propagate_with(
    csp: &mut Csp,
    new_var: Option<VariableId>,
    propagator: impl FnOnce(&mut Csp, Option<VariableId>, &mut Vec<PrunedValue>) -> PropagationStatus,
) -> PropagationResult {
    if let Some(variable) = new_var {
        quince_assert_simple!(
            csp.is_assigned(variable),
            "Propagation was triggered by {variable}, which is not assigned"
        );
    }

    let mut pruned = vec![];
    let status = propagator(csp, new_var, &mut pruned);

    if let Err(deadend) = status {
        trace!("Deadend: {deadend} after {} prunings", pruned.len());
    }
    quince_assert_advanced!(
        pruned.iter().all_unique(),
        "A value was pruned more than once in a single propagation"
    );
    quince_assert_advanced!(
        pruned
            .iter()
            .all(|pruned_value| !csp.in_current_domain(pruned_value.variable, pruned_value.value)),
        "A pruned value is still in the current domain of its variable"
    );

    PropagationResult { status, pruned }
}

/// Removes `value` from the current domain of `variable` and records it in the prune list.
fn prune(variables: &mut Variables, pruned: &mut Vec<PrunedValue>, variable: VariableId, value: i32) {
    variables[variable].prune_value(value);
    pruned.push(PrunedValue { variable, value });
}
