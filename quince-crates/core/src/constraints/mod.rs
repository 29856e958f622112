//! Table constraints over the variables of a [`Csp`](crate::Csp).
mod constraint;
mod constraint_id;

pub use constraint::Constraint;
pub use constraint_id::ConstraintId;
