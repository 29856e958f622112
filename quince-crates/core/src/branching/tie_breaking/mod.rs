//! Tie-breakers decide between variables with an equal score.
mod in_order_tie_breaker;
mod random_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use random_tie_breaker::RandomTieBreaker;

/// Collects candidates together with their score and hands back the candidate with the "best"
/// score according to its [`Direction`].
pub trait TieBreaker<Var, Value> {
    /// Considers the next candidate with its corresponding score.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected candidate and forgets every candidate considered so far, so that the
    /// tie-breaker can be reused for the next selection.
    fn select(&mut self) -> Option<Var>;

    /// Whether the tie-breaker is looking for the minimum or the maximum score.
    fn get_direction(&self) -> Direction;
}

/// Whether the tie-breaker should look for the candidate with the largest or the smallest score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

impl Direction {
    /// Whether `value` is strictly better than `incumbent` in this direction.
    pub(crate) fn improves<Value: PartialOrd>(self, value: &Value, incumbent: &Value) -> bool {
        match self {
            Direction::Maximum => value > incumbent,
            Direction::Minimum => value < incumbent,
        }
    }
}
