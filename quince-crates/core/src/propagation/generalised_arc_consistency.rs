use log::trace;

use super::prune;
use super::propagate_with;
use super::ConstraintQueue;
use crate::basic_types::Deadend;
use crate::basic_types::PropagationResult;
use crate::basic_types::PropagationStatus;
use crate::basic_types::PrunedValue;
use crate::constraints::ConstraintId;
use crate::variables::DomainStore;
use crate::variables::VariableId;
use crate::Csp;

/// Generalised arc consistency (GAC).
///
/// Constraints are revised from a FIFO queue: before search the queue holds every constraint of the
/// network, after an assignment it holds the constraints containing `new_var`. Revising a
/// constraint prunes every value which has no support in it; each pruning puts the constraints
/// of the pruned variable back on the queue (if they are not queued already), since their supports
/// may have depended on the removed value.
///
/// When the queue is empty every remaining value has a support in every constraint containing its
/// variable. The first wiped out domain stops the propagation.
pub fn propagate_gac(csp: &mut Csp, new_var: Option<VariableId>) -> PropagationResult {
    propagate_with(csp, new_var, |csp, new_var, pruned| {
        let mut queue = ConstraintQueue::new(csp.num_constraints());
        match new_var {
            Some(variable) => csp.constraints_by_variable[variable]
                .iter()
                .for_each(|constraint| queue.enqueue(*constraint)),
            None => csp
                .constraints
                .keys()
                .for_each(|constraint| queue.enqueue(constraint)),
        }

        while let Some(constraint_id) = queue.pop() {
            if let Err(deadend) = revise(csp, constraint_id, &mut queue, pruned) {
                trace!(
                    "GAC stopped with {} constraints left on the queue",
                    queue.len()
                );
                return Err(deadend);
            }
        }

        Ok(())
    })
}

fn revise(
    csp: &mut Csp,
    constraint_id: ConstraintId,
    queue: &mut ConstraintQueue,
    pruned: &mut Vec<PrunedValue>,
) -> PropagationStatus {
    let constraint = &csp.constraints[constraint_id];

    for &variable in constraint.scope() {
        // The assigned value is never pruned, losing its support means the assignment failed.
        if let Some(value) = csp.variables[variable].assigned_value() {
            if !constraint.has_support(&csp.variables, variable, value) {
                return Err(Deadend::EmptyDomain(variable));
            }
            continue;
        }

        for value in csp.variables[variable].current_domain() {
            if constraint.has_support(&csp.variables, variable, value) {
                continue;
            }

            prune(&mut csp.variables, pruned, variable, value);
            if csp.variables[variable].current_domain_size() == 0 {
                return Err(Deadend::EmptyDomain(variable));
            }

            for &affected in &csp.constraints_by_variable[variable] {
                queue.enqueue(affected);
            }
        }
    }

    Ok(())
}
