use super::propagate_with;
use crate::basic_types::Deadend;
use crate::basic_types::PropagationResult;
use crate::variables::VariableId;
use crate::Csp;

/// Plain backtracking: checks every fully assigned constraint containing `new_var` and reports a
/// [`Deadend::ViolatedConstraint`] if one of them is not satisfied.
///
/// Nothing is done before search and nothing is ever pruned.
pub fn propagate_none(csp: &mut Csp, new_var: Option<VariableId>) -> PropagationResult {
    propagate_with(csp, new_var, |csp, new_var, _| {
        let Some(new_var) = new_var else {
            return Ok(());
        };

        for &constraint_id in &csp.constraints_by_variable[new_var] {
            let constraint = &csp.constraints[constraint_id];
            if let Some(values) = constraint.assigned_values(&csp.variables) {
                if !constraint.check(&values) {
                    return Err(Deadend::ViolatedConstraint(constraint_id));
                }
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::test_network::not_equal;
    use crate::propagation::test_network::TestNetwork;

    #[test]
    fn preprocessing_does_nothing() {
        let mut network = TestNetwork::chain();

        let result = propagate_none(&mut network.csp, None);

        assert_eq!(result, PropagationResult::default());
    }

    #[test]
    fn partially_assigned_constraints_are_not_checked() {
        let mut network = TestNetwork::chain();
        network.csp.assign(network.x, 1);

        let result = propagate_none(&mut network.csp, Some(network.x));

        assert!(result.is_consistent());
        assert!(result.pruned.is_empty());
        assert_eq!(network.csp.current_domain(network.y), vec![1, 2]);
    }

    #[test]
    fn violated_fully_assigned_constraint_is_a_deadend() {
        let mut network = TestNetwork::chain();
        network.csp.assign(network.x, 1);
        network.csp.assign(network.y, 1);

        let result = propagate_none(&mut network.csp, Some(network.y));

        assert_eq!(
            result.status,
            Err(Deadend::ViolatedConstraint(network.x_not_y))
        );
        assert!(result.pruned.is_empty());
    }

    #[test]
    fn only_constraints_with_the_new_variable_are_checked() {
        let mut network = TestNetwork::chain();
        let w = network.csp.new_variable("w", [1]).unwrap();
        let _ = not_equal(&mut network.csp, network.x, w);
        network.csp.assign(network.x, 1);
        network.csp.assign(w, 1);
        network.csp.assign(network.z, 1);

        let result = propagate_none(&mut network.csp, Some(network.z));

        assert!(result.is_consistent());
    }

    #[test]
    fn violation_disappears_after_reassignment() {
        let mut network = TestNetwork::chain();
        network.csp.assign(network.y, 2);
        network.csp.assign(network.z, 2);

        let result = propagate_none(&mut network.csp, Some(network.z));

        assert_eq!(
            result.status,
            Err(Deadend::ViolatedConstraint(network.y_not_z))
        );

        network.csp.unassign(network.z);
        network.csp.assign(network.z, 1);
        network.csp.assign(network.x, 1);
        assert!(propagate_none(&mut network.csp, Some(network.x)).is_consistent());
    }
}
