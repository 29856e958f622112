use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers as soon as either of its two conditions triggers.
///
/// Decisions are reported to both conditions.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Combinator<First, Second> {
    pub fn new(first: First, second: Second) -> Self {
        Combinator { first, second }
    }
}

impl<First: TerminationCondition, Second: TerminationCondition> TerminationCondition
    for Combinator<First, Second>
{
    fn should_stop(&mut self) -> bool {
        self.first.should_stop() || self.second.should_stop()
    }

    fn decision_has_been_made(&mut self) {
        self.first.decision_has_been_made();
        self.second.decision_has_been_made();
    }
}
