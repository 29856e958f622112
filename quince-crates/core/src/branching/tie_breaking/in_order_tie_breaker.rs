use super::Direction;
use super::TieBreaker;

/// A tie-breaker which keeps the first candidate it received with the best score.
///
/// With [`Direction::Minimum`], considering `x2` with score 3 followed by `x1` with score 3 selects
/// `x2`; a later candidate only replaces the selection if its score is strictly better.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let replace = match &self.selected {
            Some((_, selected_value)) => self.direction.improves(&value, selected_value),
            None => true,
        };

        if replace {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
