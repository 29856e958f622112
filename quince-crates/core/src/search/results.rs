use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;

/// The outcome of [`BacktrackingSearch::satisfy`](super::BacktrackingSearch::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A complete assignment satisfying every constraint was found.
    Satisfiable(Solution),
    /// The search space was exhausted without finding a solution.
    Unsatisfiable,
    /// The [`TerminationCondition`] triggered before the search could reach a conclusion.
    Unknown,
}

impl SatisfactionResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable | SatisfactionResult::Unknown => None,
        }
    }
}
