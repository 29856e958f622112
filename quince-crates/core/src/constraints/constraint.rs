use std::fmt::Display;

use itertools::Itertools;

use crate::basic_types::ModelError;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::quince_asserts::quince_assert_eq_simple;
use crate::quince_asserts::quince_assert_simple;
use crate::variables::DomainStore;
use crate::variables::VariableId;
use crate::variables::Variables;

/// A constraint given in extension: the ordered `scope` may take exactly the value combinations
/// listed in its satisfying tuples.
///
/// Tuples are aligned with the scope, i.e. the `i`-th value of a tuple is a value for the `i`-th
/// variable in the scope. For every position and value, the indices of the tuples containing that
/// value at that position are kept, so that support queries only look at tuples which can actually
/// support the queried value.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Vec<VariableId>,
    tuples: Vec<Box<[i32]>>,
    /// The stored tuples, for constant time duplicate detection.
    stored: HashSet<Box<[i32]>>,
    supports: Vec<HashMap<i32, Vec<usize>>>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, scope: impl IntoIterator<Item = VariableId>) -> Constraint {
        let scope = scope.into_iter().collect::<Vec<_>>();
        Constraint {
            name: name.into(),
            supports: vec![HashMap::default(); scope.len()],
            scope,
            tuples: vec![],
            stored: HashSet::default(),
        }
    }

    /// Adds the provided tuples to the satisfying tuples of the constraint; a tuple which is
    /// already present is ignored.
    ///
    /// Every tuple is checked against the arity before any of them is added, so on an error the
    /// constraint is left unchanged. Whether the values belong to the domains of the scope is
    /// checked when the constraint is added to a [`Csp`](crate::Csp).
    pub fn add_satisfying_tuples<Tuple: AsRef<[i32]>>(
        &mut self,
        tuples: impl IntoIterator<Item = Tuple>,
    ) -> Result<(), ModelError> {
        let tuples = tuples.into_iter().collect::<Vec<_>>();
        if let Some(tuple) = tuples
            .iter()
            .find(|tuple| tuple.as_ref().len() != self.arity())
        {
            return Err(ModelError::TupleArityMismatch {
                constraint: self.name.clone(),
                arity: self.arity(),
                length: tuple.as_ref().len(),
            });
        }

        for tuple in tuples {
            let tuple: Box<[i32]> = tuple.as_ref().into();
            if self.stored.contains(&tuple) {
                continue;
            }

            let index = self.tuples.len();
            for (position, value) in tuple.iter().enumerate() {
                self.supports[position]
                    .entry(*value)
                    .or_default()
                    .push(index);
            }
            let _ = self.stored.insert(tuple.clone());
            self.tuples.push(tuple);
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    pub fn satisfying_tuples(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.tuples.iter().map(|tuple| tuple.as_ref())
    }

    /// The position of `variable` in the scope, if it is part of it.
    pub fn position_of(&self, variable: VariableId) -> Option<usize> {
        self.scope.iter().position(|scope_variable| *scope_variable == variable)
    }

    /// The number of variables in the scope which are not assigned.
    pub fn num_unassigned(&self, variables: &Variables) -> usize {
        self.scope
            .iter()
            .filter(|variable| !variables[**variable].is_assigned())
            .count()
    }

    /// The variables in the scope which are not assigned, in scope order.
    pub fn unassigned_variables(&self, variables: &Variables) -> Vec<VariableId> {
        self.scope
            .iter()
            .copied()
            .filter(|variable| !variables[*variable].is_assigned())
            .collect()
    }

    /// The assigned values of the scope, or [`None`] if some variable in the scope is unassigned.
    pub fn assigned_values(&self, variables: &Variables) -> Option<Vec<i32>> {
        self.scope
            .iter()
            .map(|variable| variables[*variable].assigned_value())
            .collect()
    }

    /// Whether the `values` (aligned with the scope) form a satisfying tuple.
    pub fn check(&self, values: &[i32]) -> bool {
        quince_assert_eq_simple!(values.len(), self.arity());

        let Some(first) = values.first() else {
            return !self.tuples.is_empty();
        };

        self.supports[0].get(first).is_some_and(|indices| {
            indices
                .iter()
                .any(|index| self.tuples[*index].as_ref() == values)
        })
    }

    /// Whether `variable = value` has a support in this constraint: a satisfying tuple with
    /// `value` for `variable` in which every other value is in the current domain of its
    /// variable (for an assigned variable this means it is equal to the assigned value).
    pub fn has_support(&self, variables: &Variables, variable: VariableId, value: i32) -> bool {
        let position = self.position_of(variable);
        quince_assert_simple!(
            position.is_some(),
            "{variable} is not in the scope of constraint '{}'",
            self.name
        );
        let Some(position) = position else {
            return false;
        };

        self.supports[position].get(&value).is_some_and(|indices| {
            indices
                .iter()
                .any(|index| self.is_valid_tuple(variables, &self.tuples[*index]))
        })
    }

    fn is_valid_tuple(&self, variables: &Variables, tuple: &[i32]) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(variable, value)| variables[*variable].in_current_domain(*value))
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) with {} tuples",
            self.name,
            self.scope.iter().join(", "),
            self.tuples.len()
        )
    }
}
