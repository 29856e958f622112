//! Contains the strategies which decide which variable the search assigns next.
//!
//! A [`VariableSelector`] looks at the current state of a [`Csp`](crate::Csp) and returns an
//! unassigned variable (or [`None`] if every variable is assigned). Selectors which compare
//! variables by a score hand the candidates to a [`TieBreaker`], which determines what happens
//! when several variables share the best score.
pub mod tie_breaking;
pub mod variable_selection;

pub use tie_breaking::*;
pub use variable_selection::*;
