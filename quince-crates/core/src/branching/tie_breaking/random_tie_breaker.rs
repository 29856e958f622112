use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects a candidate with the best score, choosing uniformly at random
/// among all candidates sharing that score.
///
/// The selection is a reservoir sample of size one: the `n`-th candidate with a score equal to the
/// best one seen so far replaces the selection with probability `1 / n`, a strictly better score
/// always replaces it. Given the same seed and the same candidates the selection is the same.
#[derive(Debug)]
pub struct RandomTieBreaker<Var, Value> {
    selected: Option<(Var, Value)>,
    /// The number of candidates considered with the score of the current selection.
    num_ties: u32,
    rng: SmallRng,
    direction: Direction,
}

impl<Var, Value> RandomTieBreaker<Var, Value> {
    pub fn new(direction: Direction, seed: u64) -> Self {
        Self {
            selected: None,
            num_ties: 0,
            rng: SmallRng::seed_from_u64(seed),
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for RandomTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let (is_tie, is_better) = match &self.selected {
            Some((_, selected_value)) => (
                value == *selected_value,
                self.direction.improves(&value, selected_value),
            ),
            None => (false, true),
        };

        if is_better {
            self.num_ties = 1;
            self.selected = Some((variable, value));
        } else if is_tie {
            self.num_ties += 1;
            if self.rng.gen_ratio(1, self.num_ties) {
                self.selected = Some((variable, value));
            }
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.num_ties = 0;
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
