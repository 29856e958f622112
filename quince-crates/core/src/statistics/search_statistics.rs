use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters of a single search run.
    pub SearchStatistics {
        /// The number of values assigned to a variable.
        num_decisions: u64,
        /// The number of propagator calls which ended in a deadend, including the preprocessing.
        num_deadends: u64,
        /// The number of values pruned by the propagator.
        num_prunings: u64,
        /// The number of times the propagator was invoked, including the preprocessing.
        num_propagator_calls: u64,
        /// The largest number of simultaneously assigned variables.
        peak_depth: u64,
        /// The wall-clock time of the run in milliseconds.
        solve_time_ms: u128,
    }
);
