//! Small networks for testing the propagators.
use itertools::Itertools;

use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::variables::VariableId;
use crate::Csp;

/// Adds the constraint `a != b` over the original domains of `a` and `b`.
pub(crate) fn not_equal(csp: &mut Csp, a: VariableId, b: VariableId) -> ConstraintId {
    let tuples = csp
        .variable(a)
        .domain()
        .iter()
        .cartesian_product(csp.variable(b).domain())
        .filter(|(x, y)| x != y)
        .map(|(x, y)| [*x, *y])
        .collect::<Vec<_>>();

    table(csp, &format!("{a} != {b}"), &[a, b], tuples)
}

/// Adds a constraint over `scope` which allows exactly the given tuples.
pub(crate) fn table<Tuple: AsRef<[i32]>>(
    csp: &mut Csp,
    name: &str,
    scope: &[VariableId],
    tuples: impl IntoIterator<Item = Tuple>,
) -> ConstraintId {
    let mut constraint = Constraint::new(name, scope.iter().copied());
    constraint
        .add_satisfying_tuples(tuples)
        .expect("test tuples should have the arity of the scope");
    csp.add_constraint(constraint)
        .expect("test constraints should be well-formed")
}

/// Adds the constraint `sum(scope) == total` over the original domains of `scope`.
pub(crate) fn sum_equals(csp: &mut Csp, scope: &[VariableId], total: i32) -> ConstraintId {
    let tuples = scope
        .iter()
        .map(|variable| csp.variable(*variable).domain().to_vec())
        .multi_cartesian_product()
        .filter(|tuple| tuple.iter().sum::<i32>() == total)
        .collect::<Vec<_>>();

    table(csp, &format!("sum = {total}"), scope, tuples)
}

/// The network `x != y`, `y != z` with `x, y, z in {1, 2}`.
#[derive(Debug)]
pub(crate) struct TestNetwork {
    pub(crate) csp: Csp,
    pub(crate) x: VariableId,
    pub(crate) y: VariableId,
    pub(crate) z: VariableId,
    pub(crate) x_not_y: ConstraintId,
    pub(crate) y_not_z: ConstraintId,
}

impl TestNetwork {
    pub(crate) fn chain() -> TestNetwork {
        let mut csp = Csp::new("chain");
        let x = csp.new_variable("x", [1, 2]).unwrap();
        let y = csp.new_variable("y", [1, 2]).unwrap();
        let z = csp.new_variable("z", [1, 2]).unwrap();
        let x_not_y = not_equal(&mut csp, x, y);
        let y_not_z = not_equal(&mut csp, y, z);

        TestNetwork {
            csp,
            x,
            y,
            z,
            x_not_y,
            y_not_z,
        }
    }
}
