use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::quince_asserts::quince_assert_eq_simple;
use crate::variables::VariableId;
use crate::Csp;

/// Returns the unassigned variable with the smallest current domain; of several variables with the
/// same size the one created first is returned.
///
/// # Panics
/// When every variable of `csp` is assigned.
pub fn minimum_remaining_values(csp: &Csp) -> VariableId {
    csp.unassigned_variables()
        .min_by_key(|variable| csp.current_domain_size(*variable))
        .expect("minimum remaining values requires an unassigned variable")
}

/// A [`VariableSelector`] which selects the unassigned variable with the smallest current domain
/// (also known as "first-fail").
///
/// Ties are broken by a [`TieBreaker`]; the default [`InOrderTieBreaker`] selects the variable
/// created first, which coincides with [`minimum_remaining_values`]. A different tie-breaker can
/// be provided through [`MinimumRemainingValues::with_tie_breaker`].
#[derive(Debug)]
pub struct MinimumRemainingValues<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl Default for MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>> {
    fn default() -> Self {
        MinimumRemainingValues::new()
    }
}

impl MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>> {
    pub fn new() -> Self {
        MinimumRemainingValues {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        quince_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The tie-breaker provided to MinimumRemainingValues looks for the maximum instead of the minimum"
        );
        MinimumRemainingValues { tie_breaker }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> VariableSelector
    for MinimumRemainingValues<TieBreaking>
{
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        csp.unassigned_variables().for_each(|variable| {
            self.tie_breaker
                .consider(variable, csp.current_domain_size(variable));
        });
        self.tie_breaker.select()
    }
}
