//! # Quince
//! The propagation core of a constraint satisfaction solver over table constraints.
//!
//! A [`Csp`] holds variables with finite integer domains and constraints given in extension (as
//! lists of satisfying tuples). While a variable is assigned, its current domain consists of the
//! assigned value only; every other variable has a current domain which propagation may shrink.
//!
//! Three propagation strategies are provided in [`propagation`]: plain backtracking (no pruning),
//! forward checking and generalised arc consistency. They report the values they pruned so that a
//! backtracking search can restore them; [`search::BacktrackingSearch`] is such a search.
//!
//! # Example
//! ```rust
//! # use quince_core::constraints::Constraint;
//! # use quince_core::propagation::propagate_gac;
//! let mut csp = quince_core::Csp::new("example");
//! let x = csp.new_variable("x", [1, 2]).unwrap();
//! let y = csp.new_variable("y", [1, 2]).unwrap();
//!
//! let mut x_not_y = Constraint::new("x != y", [x, y]);
//! x_not_y.add_satisfying_tuples([[1, 2], [2, 1]]).unwrap();
//! let _ = csp.add_constraint(x_not_y).unwrap();
//!
//! csp.assign(x, 1);
//! let result = propagate_gac(&mut csp, Some(x));
//! assert!(result.is_consistent());
//! assert_eq!(csp.current_domain(y), vec![2]);
//!
//! // The search is responsible for undoing propagation.
//! csp.restore(&result.pruned);
//! csp.unassign(x);
//! assert_eq!(csp.current_domain(y), vec![1, 2]);
//! ```
pub(crate) mod quince_asserts;

pub mod basic_types;
pub mod branching;
pub mod constraints;
pub mod containers;
pub mod propagation;
pub mod search;
pub mod statistics;
pub mod termination;
pub mod variables;

mod csp;

pub use convert_case;

pub use crate::csp::Csp;
