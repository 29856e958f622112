use super::VariableSelector;
use crate::variables::VariableId;
use crate::Csp;

/// A [`VariableSelector`] which selects the first unassigned variable in the order in which the
/// variables were created.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        csp.unassigned_variables().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_unassigned_variable_is_selected() {
        let mut csp = Csp::new("order");
        let x = csp.new_variable("x", [1]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();
        let _ = csp.new_variable("z", [1, 2]).unwrap();

        assert_eq!(InputOrder.select_variable(&csp), Some(x));

        csp.assign(x, 1);
        assert_eq!(InputOrder.select_variable(&csp), Some(y));
    }

    #[test]
    fn assigned_network_selects_nothing() {
        let mut csp = Csp::new("assigned");
        let x = csp.new_variable("x", [4]).unwrap();
        csp.assign(x, 4);

        assert_eq!(InputOrder.select_variable(&csp), None);
    }
}
