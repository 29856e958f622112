use std::fmt::Display;

use crate::containers::StorageKey;

/// Identifies a [`Variable`](super::Variable) within the [`Csp`](crate::Csp) which created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId {
    id: u32,
}

impl VariableId {
    pub const fn new(id: u32) -> Self {
        VariableId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
