//! Conditions which bound a search run.
//!
//! The search polls its [`TerminationCondition`] before every decision and reports
//! [`SatisfactionResult::Unknown`](crate::search::SatisfactionResult::Unknown) once the condition
//! triggers, e.g. after a [`TimeBudget`] has elapsed.
mod combinator;
mod decision_budget;
mod indefinite;
mod time_budget;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the search should give up before it has found a solution or proven that there
/// is none.
pub trait TerminationCondition {
    /// Whether the search should stop now.
    fn should_stop(&mut self) -> bool;

    /// Called by the search every time it assigns a value to a variable.
    fn decision_has_been_made(&mut self) {}
}

impl<Condition: TerminationCondition> TerminationCondition for Option<Condition> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|condition| condition.should_stop())
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made();
        }
    }
}
