use super::prune;
use super::propagate_with;
use crate::basic_types::Deadend;
use crate::basic_types::PropagationResult;
use crate::basic_types::PropagationStatus;
use crate::basic_types::PrunedValue;
use crate::constraints::ConstraintId;
use crate::quince_asserts::quince_assert_simple;
use crate::variables::DomainStore;
use crate::variables::VariableId;
use crate::Csp;

/// Forward checking: every constraint with exactly one unassigned variable is forward checked.
///
/// Before search all such constraints of the network are considered, after an assignment only the
/// ones containing `new_var`. Constraints with two or more unassigned variables are left alone.
/// Propagation stops at the first constraint whose unassigned variable runs out of values.
pub fn propagate_forward_check(csp: &mut Csp, new_var: Option<VariableId>) -> PropagationResult {
    propagate_with(csp, new_var, |csp, new_var, pruned| {
        let candidates = match new_var {
            Some(variable) => csp.constraints_by_variable[variable].clone(),
            None => csp.constraints().collect(),
        };

        for constraint_id in candidates {
            if csp.constraints[constraint_id].num_unassigned(&csp.variables) == 1 {
                forward_check(csp, constraint_id, pruned)?;
            }
        }

        Ok(())
    })
}

/// Prunes every value of the single unassigned variable `v` of the constraint for which `v =
/// value`, together with the assigned values of the rest of the scope, is not a satisfying tuple.
fn forward_check(
    csp: &mut Csp,
    constraint_id: ConstraintId,
    pruned: &mut Vec<PrunedValue>,
) -> PropagationStatus {
    let constraint = &csp.constraints[constraint_id];

    let mut values = Vec::with_capacity(constraint.arity());
    let mut unassigned = None;
    for (position, &variable) in constraint.scope().iter().enumerate() {
        match csp.variables[variable].assigned_value() {
            Some(value) => values.push(value),
            None => {
                quince_assert_simple!(
                    unassigned.is_none(),
                    "Forward checking requires a single unassigned variable"
                );
                unassigned = Some((position, variable));
                values.push(0);
            }
        }
    }

    let Some((position, variable)) = unassigned else {
        return Ok(());
    };

    for value in csp.variables[variable].current_domain() {
        values[position] = value;
        if !constraint.check(&values) {
            prune(&mut csp.variables, pruned, variable, value);
        }
    }

    if csp.variables[variable].current_domain_size() == 0 {
        return Err(Deadend::EmptyDomain(variable));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::test_network::sum_equals;
    use crate::propagation::test_network::table;
    use crate::propagation::test_network::TestNetwork;

    #[test]
    fn assignment_prunes_neighbour_with_single_unassigned_variable() {
        let mut network = TestNetwork::chain();
        network.csp.assign(network.x, 1);

        let result = propagate_forward_check(&mut network.csp, Some(network.x));

        assert!(result.is_consistent());
        assert_eq!(
            result.pruned,
            vec![PrunedValue {
                variable: network.y,
                value: 1
            }]
        );
        assert_eq!(network.csp.current_domain(network.y), vec![2]);
        // `y != z` still has two unassigned variables
        assert_eq!(network.csp.current_domain(network.z), vec![1, 2]);
    }

    #[test]
    fn preprocessing_prunes_unary_constraints() {
        let mut csp = Csp::new("unary");
        let x = csp.new_variable("x", [1, 2, 3]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();
        let _ = table(&mut csp, "x odd", &[x], [[1], [3]]);
        let _ = sum_equals(&mut csp, &[x, y], 4);

        let result = propagate_forward_check(&mut csp, None);

        assert!(result.is_consistent());
        assert_eq!(csp.current_domain(x), vec![1, 3]);
        assert_eq!(csp.current_domain(y), vec![1, 2, 3]);
    }

    #[test]
    fn wiped_out_domain_is_a_deadend_with_partial_prunings() {
        let mut csp = Csp::new("wipeout");
        let x = csp.new_variable("x", [1, 2]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();
        let z = csp.new_variable("z", [5, 6]).unwrap();
        let _ = table(&mut csp, "y > x", &[x, y], [[1, 2], [1, 3], [2, 3]]);
        let _ = table(&mut csp, "x + z = 7", &[x, z], [[1, 6], [2, 5]]);
        let _ = table(&mut csp, "y = 1 when x = 2", &[x, y], [[1, 1], [1, 2], [2, 1]]);
        csp.assign(x, 2);

        let result = propagate_forward_check(&mut csp, Some(x));

        assert_eq!(result.status, Err(Deadend::EmptyDomain(y)));
        assert_eq!(
            result.pruned,
            vec![
                PrunedValue { variable: y, value: 1 },
                PrunedValue { variable: y, value: 2 },
                PrunedValue { variable: z, value: 6 },
                PrunedValue { variable: y, value: 3 },
            ]
        );
    }

    #[test]
    fn constraints_with_two_unassigned_variables_are_ignored() {
        let mut csp = Csp::new("ternary");
        let x = csp.new_variable("x", [0, 1]).unwrap();
        let y = csp.new_variable("y", [0, 1]).unwrap();
        let z = csp.new_variable("z", [0, 1]).unwrap();
        let _ = sum_equals(&mut csp, &[x, y, z], 3);
        csp.assign(x, 1);

        let result = propagate_forward_check(&mut csp, Some(x));

        assert!(result.is_consistent());
        assert!(result.pruned.is_empty());
    }

    #[test]
    fn restoring_the_prune_list_restores_the_network() {
        let mut network = TestNetwork::chain();
        network.csp.assign(network.x, 2);

        let result = propagate_forward_check(&mut network.csp, Some(network.x));
        network.csp.restore(&result.pruned);

        assert_eq!(network.csp.current_domain(network.y), vec![1, 2]);
    }
}
