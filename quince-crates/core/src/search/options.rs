use std::fmt::Display;

use crate::branching::Direction;
use crate::branching::InputOrder;
use crate::branching::MinimumRemainingValues;
use crate::branching::RandomTieBreaker;
use crate::branching::VariableSelector;
use crate::propagation::PropagationMethod;

/// The configuration of a [`BacktrackingSearch`](super::BacktrackingSearch).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// The propagator which is run before search and after every assignment.
    pub propagation: PropagationMethod,
    /// How the next variable to assign is chosen.
    pub variable_ordering: VariableOrdering,
    /// The seed for [`VariableOrdering::RandomisedMinimumRemainingValues`].
    pub random_seed: u64,
}

/// The order in which the search assigns variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableOrdering {
    /// The first unassigned variable in creation order.
    InputOrder,
    /// The unassigned variable with the smallest current domain, the first created one on ties.
    #[default]
    MinimumRemainingValues,
    /// The unassigned variable with the smallest current domain, a random one on ties.
    RandomisedMinimumRemainingValues,
}

impl VariableOrdering {
    pub(crate) fn create_selector(self, seed: u64) -> Box<dyn VariableSelector> {
        match self {
            VariableOrdering::InputOrder => Box::new(InputOrder),
            VariableOrdering::MinimumRemainingValues => Box::new(MinimumRemainingValues::new()),
            VariableOrdering::RandomisedMinimumRemainingValues => Box::new(
                MinimumRemainingValues::with_tie_breaker(RandomTieBreaker::new(
                    Direction::Minimum,
                    seed,
                )),
            ),
        }
    }
}

impl Display for VariableOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableOrdering::InputOrder => write!(f, "input-order"),
            VariableOrdering::MinimumRemainingValues => write!(f, "mrv"),
            VariableOrdering::RandomisedMinimumRemainingValues => write!(f, "randomised-mrv"),
        }
    }
}
