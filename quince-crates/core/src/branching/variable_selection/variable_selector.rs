use crate::variables::VariableId;
use crate::Csp;

/// Decides which variable the search assigns next.
pub trait VariableSelector {
    /// Selects an unassigned variable of `csp` to branch on next.
    ///
    /// Should only return [`None`] when every variable of the network is assigned.
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId>;
}

impl<Selector: VariableSelector + ?Sized> VariableSelector for Box<Selector> {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        (**self).select_variable(csp)
    }
}
