//! The variables of a [`Csp`](crate::Csp) and the operations on their current domains.
mod domain_store;
mod variable;
mod variable_id;

pub use domain_store::DomainStore;
pub use variable::Variable;
pub use variable_id::VariableId;

use crate::containers::KeyedVec;

/// The store of all variables of a [`Csp`](crate::Csp), indexed by [`VariableId`].
pub type Variables = KeyedVec<VariableId, Variable>;
