//! Depth-first backtracking search over a [`Csp`](crate::Csp), interleaved with propagation.
mod backtracking_search;
mod options;
mod results;

pub use backtracking_search::BacktrackingSearch;
pub use options::SearchOptions;
pub use options::VariableOrdering;
pub use results::SatisfactionResult;
