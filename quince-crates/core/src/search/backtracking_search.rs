use std::time::Instant;

use log::debug;
use log::info;

use crate::basic_types::PropagationResult;
use crate::basic_types::Solution;
use crate::branching::VariableSelector;
use crate::quince_asserts::print_quince_assert_warning_message;
use crate::search::SatisfactionResult;
use crate::search::SearchOptions;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::SearchStatistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;
use crate::variables::VariableId;
use crate::Csp;

/// Depth-first search which assigns one variable at a time and runs the configured propagator
/// after every assignment.
///
/// The values of the selected variable are tried in the order of its current domain. Whatever the
/// outcome of a run, the network is left with every variable unassigned and every current domain
/// equal to the original domain.
///
/// # Example
/// ```rust
/// # use quince_core::constraints::Constraint;
/// # use quince_core::search::BacktrackingSearch;
/// # use quince_core::search::SatisfactionResult;
/// # use quince_core::search::SearchOptions;
/// # use quince_core::termination::Indefinite;
/// # use quince_core::Csp;
/// let mut csp = Csp::new("example");
/// let x = csp.new_variable("x", [1, 2]).unwrap();
/// let y = csp.new_variable("y", [1, 2]).unwrap();
///
/// let mut x_less_than_y = Constraint::new("x < y", [x, y]);
/// x_less_than_y.add_satisfying_tuples([[1, 2]]).unwrap();
/// let _ = csp.add_constraint(x_less_than_y).unwrap();
///
/// let mut search = BacktrackingSearch::new(SearchOptions::default());
/// let SatisfactionResult::Satisfiable(solution) = search.satisfy(&mut csp, &mut Indefinite)
/// else {
///     panic!("x < y has a solution");
/// };
/// assert_eq!(solution.value(x), 1);
/// assert_eq!(solution.value(y), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BacktrackingSearch {
    options: SearchOptions,
    statistics: SearchStatistics,
}

/// What a subtree of the search ended with.
enum SearchOutcome {
    Solution(Solution),
    Exhausted,
    Stopped,
}

impl BacktrackingSearch {
    pub fn new(options: SearchOptions) -> BacktrackingSearch {
        BacktrackingSearch {
            options,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The statistics of the most recent call to [`BacktrackingSearch::satisfy`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Searches for a single solution of `csp`.
    ///
    /// Any existing assignment and pruning in `csp` is discarded first. `termination` is polled
    /// before every decision.
    pub fn satisfy(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        print_quince_assert_warning_message!();

        let started_at = Instant::now();
        self.statistics = SearchStatistics::default();
        csp.restore_all();

        info!(
            "Searching '{}' ({} variables, {} constraints) with {} and {} ordering",
            csp.name(),
            csp.num_variables(),
            csp.num_constraints(),
            self.options.propagation,
            self.options.variable_ordering
        );

        let preprocessing = self.propagate(csp, None);
        let result = if preprocessing.is_deadend() {
            debug!("Preprocessing detected a deadend");
            SatisfactionResult::Unsatisfiable
        } else {
            let mut selector = self
                .options
                .variable_ordering
                .create_selector(self.options.random_seed);

            match self.search(csp, &mut selector, termination, 0) {
                SearchOutcome::Solution(solution) => SatisfactionResult::Satisfiable(solution),
                SearchOutcome::Exhausted => SatisfactionResult::Unsatisfiable,
                SearchOutcome::Stopped => SatisfactionResult::Unknown,
            }
        };
        csp.restore(&preprocessing.pruned);

        self.statistics.solve_time_ms = started_at.elapsed().as_millis();
        info!(
            "Search finished after {} decisions: {}",
            self.statistics.num_decisions,
            match &result {
                SatisfactionResult::Satisfiable(_) => "satisfiable",
                SatisfactionResult::Unsatisfiable => "unsatisfiable",
                SatisfactionResult::Unknown => "unknown",
            }
        );

        result
    }

    /// Writes the statistics of the most recent run, if statistic logging is configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }

    fn search(
        &mut self,
        csp: &mut Csp,
        selector: &mut impl VariableSelector,
        termination: &mut impl TerminationCondition,
        depth: u64,
    ) -> SearchOutcome {
        let Some(variable) = selector.select_variable(csp) else {
            return SearchOutcome::Solution(Solution::from_assigned(csp));
        };

        for value in csp.current_domain(variable) {
            if termination.should_stop() {
                debug!("Search stopped by the termination condition at depth {depth}");
                return SearchOutcome::Stopped;
            }

            let outcome = self.decide(csp, selector, termination, depth, variable, value);
            match outcome {
                SearchOutcome::Exhausted => continue,
                SearchOutcome::Solution(_) | SearchOutcome::Stopped => return outcome,
            }
        }

        SearchOutcome::Exhausted
    }

    /// Explores the subtree of `variable = value` and undoes the assignment afterwards.
    fn decide(
        &mut self,
        csp: &mut Csp,
        selector: &mut impl VariableSelector,
        termination: &mut impl TerminationCondition,
        depth: u64,
        variable: VariableId,
        value: i32,
    ) -> SearchOutcome {
        termination.decision_has_been_made();
        self.statistics.num_decisions += 1;
        self.statistics.peak_depth = self.statistics.peak_depth.max(depth + 1);

        csp.assign(variable, value);
        let propagation = self.propagate(csp, Some(variable));
        let outcome = if propagation.is_consistent() {
            self.search(csp, selector, termination, depth + 1)
        } else {
            SearchOutcome::Exhausted
        };
        csp.restore(&propagation.pruned);
        csp.unassign(variable);

        outcome
    }

    fn propagate(&mut self, csp: &mut Csp, new_var: Option<VariableId>) -> PropagationResult {
        let result = self.options.propagation.propagate(csp, new_var);

        self.statistics.num_propagator_calls += 1;
        self.statistics.num_prunings += result.pruned.len() as u64;
        if result.is_deadend() {
            self.statistics.num_deadends += 1;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::test_network::not_equal;
    use crate::propagation::test_network::TestNetwork;
    use crate::propagation::PropagationMethod;
    use crate::search::VariableOrdering;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;

    fn all_options() -> impl Iterator<Item = SearchOptions> {
        [
            PropagationMethod::PlainBacktracking,
            PropagationMethod::ForwardChecking,
            PropagationMethod::GeneralisedArcConsistency,
        ]
        .into_iter()
        .flat_map(|propagation| {
            [
                VariableOrdering::InputOrder,
                VariableOrdering::MinimumRemainingValues,
                VariableOrdering::RandomisedMinimumRemainingValues,
            ]
            .into_iter()
            .map(move |variable_ordering| SearchOptions {
                propagation,
                variable_ordering,
                random_seed: 3,
            })
        })
    }

    fn assert_initial_state(csp: &Csp) {
        for variable in csp.variables() {
            assert!(!csp.is_assigned(variable));
            assert_eq!(
                csp.current_domain(variable),
                csp.variable(variable).domain().to_vec()
            );
        }
    }

    #[test]
    fn chain_is_solved_by_every_configuration() {
        for options in all_options() {
            let mut network = TestNetwork::chain();
            let mut search = BacktrackingSearch::new(options);

            let result = search.satisfy(&mut network.csp, &mut Indefinite);

            let solution = result.solution().expect("the chain has a solution");
            assert_ne!(solution.value(network.x), solution.value(network.y));
            assert_ne!(solution.value(network.y), solution.value(network.z));
            assert_initial_state(&network.csp);
        }
    }

    #[test]
    fn input_order_finds_the_first_solution_in_lexicographic_order() {
        let mut network = TestNetwork::chain();
        let mut search = BacktrackingSearch::new(SearchOptions {
            propagation: PropagationMethod::PlainBacktracking,
            variable_ordering: VariableOrdering::InputOrder,
            random_seed: 0,
        });

        let result = search.satisfy(&mut network.csp, &mut Indefinite);

        let solution = result.solution().unwrap();
        assert_eq!(
            solution.iter().collect::<Vec<_>>(),
            vec![(network.x, "x", 1), (network.y, "y", 2), (network.z, "z", 1)]
        );
    }

    #[test]
    fn triangle_with_two_values_is_unsatisfiable() {
        for options in all_options() {
            let mut csp = Csp::new("triangle");
            let x = csp.new_variable("x", [1, 2]).unwrap();
            let y = csp.new_variable("y", [1, 2]).unwrap();
            let z = csp.new_variable("z", [1, 2]).unwrap();
            let _ = not_equal(&mut csp, x, y);
            let _ = not_equal(&mut csp, y, z);
            let _ = not_equal(&mut csp, x, z);

            let mut search = BacktrackingSearch::new(options);
            let result = search.satisfy(&mut csp, &mut Indefinite);

            assert_eq!(result, SatisfactionResult::Unsatisfiable);
            assert_initial_state(&csp);
        }
    }

    #[test]
    fn preprocessing_deadend_makes_no_decisions() {
        let mut csp = Csp::new("empty relation");
        let x = csp.new_variable("x", [1, 2]).unwrap();
        let y = csp.new_variable("y", [1, 2]).unwrap();
        let _ = csp
            .add_constraint(crate::constraints::Constraint::new("never", [x, y]))
            .unwrap();

        let mut search = BacktrackingSearch::new(SearchOptions::default());
        let result = search.satisfy(&mut csp, &mut Indefinite);

        assert_eq!(result, SatisfactionResult::Unsatisfiable);
        assert_eq!(search.statistics().num_decisions, 0);
        assert_eq!(search.statistics().num_deadends, 1);
        assert_initial_state(&csp);
    }

    #[test]
    fn exhausted_budget_gives_unknown() {
        let mut csp = Csp::new("pigeons");
        let pigeons = (0..4)
            .map(|index| csp.new_variable(format!("p{index}"), 0..3).unwrap())
            .collect::<Vec<_>>();
        for (index, first) in pigeons.iter().enumerate() {
            for second in &pigeons[index + 1..] {
                let _ = not_equal(&mut csp, *first, *second);
            }
        }

        let mut search = BacktrackingSearch::new(SearchOptions {
            propagation: PropagationMethod::PlainBacktracking,
            ..Default::default()
        });
        let result = search.satisfy(&mut csp, &mut DecisionBudget::new(5));

        assert_eq!(result, SatisfactionResult::Unknown);
        assert_eq!(search.statistics().num_decisions, 5);
        assert_initial_state(&csp);
    }

    #[test]
    fn statistics_are_counted() {
        let mut network = TestNetwork::chain();
        let mut search = BacktrackingSearch::new(SearchOptions {
            propagation: PropagationMethod::ForwardChecking,
            variable_ordering: VariableOrdering::InputOrder,
            random_seed: 0,
        });

        let result = search.satisfy(&mut network.csp, &mut Indefinite);
        assert!(result.solution().is_some());

        let statistics = search.statistics();
        assert_eq!(statistics.num_decisions, 3);
        assert_eq!(statistics.num_propagator_calls, 4);
        assert_eq!(statistics.num_deadends, 0);
        assert_eq!(statistics.num_prunings, 2);
        assert_eq!(statistics.peak_depth, 3);
    }

    #[test]
    fn network_without_variables_has_the_empty_solution() {
        let mut csp = Csp::new("empty");
        let mut search = BacktrackingSearch::new(SearchOptions::default());

        let result = search.satisfy(&mut csp, &mut Indefinite);

        assert_eq!(result.solution().map(Solution::num_variables), Some(0));
    }
}
