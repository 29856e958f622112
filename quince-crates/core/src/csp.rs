use log::debug;

use crate::basic_types::ModelError;
use crate::basic_types::PrunedValue;
use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::quince_asserts::quince_assert_simple;
use crate::variables::DomainStore;
use crate::variables::Variable;
use crate::variables::VariableId;
use crate::variables::Variables;

/// A constraint network: the variables, the constraints over them and, for every variable, the
/// constraints which contain it in their scope.
///
/// Variables and constraints are created once by a model builder. Afterwards only the current
/// domains and the assignments change, through [`Csp::assign`], [`Csp::unassign`],
/// [`Csp::restore`] and the propagators in [`crate::propagation`].
#[derive(Clone, Debug)]
pub struct Csp {
    name: String,
    pub(crate) variables: Variables,
    pub(crate) constraints: KeyedVec<ConstraintId, Constraint>,
    pub(crate) constraints_by_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Csp {
        Csp {
            name: name.into(),
            variables: KeyedVec::default(),
            constraints: KeyedVec::default(),
            constraints_by_variable: KeyedVec::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new unassigned variable with the given original domain.
    pub fn new_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = i32>,
    ) -> Result<VariableId, ModelError> {
        let variable = Variable::new(name, domain);
        if variable.domain_size() == 0 {
            return Err(ModelError::EmptyDomain(variable.name().to_owned()));
        }

        let id = self.variables.push(variable);
        let _ = self.constraints_by_variable.push(vec![]);
        Ok(id)
    }

    /// Adds the constraint to the network after verifying that its scope consists of distinct
    /// variables of this network and that every tuple only uses values from the original domains.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        if constraint.arity() == 0 {
            return Err(ModelError::EmptyScope(constraint.name().to_owned()));
        }

        let mut seen: HashSet<VariableId> = HashSet::default();
        for &variable in constraint.scope() {
            if self.variables.get(variable).is_none() {
                return Err(ModelError::UnknownVariable {
                    constraint: constraint.name().to_owned(),
                    variable,
                });
            }
            if !seen.insert(variable) {
                return Err(ModelError::DuplicateScopeVariable {
                    constraint: constraint.name().to_owned(),
                    variable,
                });
            }
        }

        for tuple in constraint.satisfying_tuples() {
            for (&variable, &value) in constraint.scope().iter().zip(tuple) {
                if !self.variables[variable].in_domain(value) {
                    return Err(ModelError::ValueOutsideDomain {
                        constraint: constraint.name().to_owned(),
                        variable,
                        value,
                    });
                }
            }
        }

        debug!("Adding constraint {constraint}");

        let scope = constraint.scope().to_vec();
        let id = self.constraints.push(constraint);
        for variable in scope {
            self.constraints_by_variable[variable].push(id);
        }
        Ok(id)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// All variables in the order in which they were created.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    /// All constraints in the order in which they were added.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    pub fn variable_store(&self) -> &Variables {
        &self.variables
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    /// The constraints which contain `variable` in their scope, in the order in which they were
    /// added.
    pub fn constraints_with_variable(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    /// The variables which are not assigned, in the order in which they were created.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .keys()
            .filter(|variable| !self.variables[*variable].is_assigned())
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.variables[variable].is_assigned()
    }

    pub fn assigned_value(&self, variable: VariableId) -> Option<i32> {
        self.variables[variable].assigned_value()
    }

    pub fn current_domain(&self, variable: VariableId) -> Vec<i32> {
        self.variables[variable].current_domain()
    }

    pub fn current_domain_size(&self, variable: VariableId) -> usize {
        self.variables[variable].current_domain_size()
    }

    pub fn in_current_domain(&self, variable: VariableId, value: i32) -> bool {
        self.variables[variable].in_current_domain(value)
    }

    /// Assigns `value` to the unassigned `variable`; the value has to be in its current domain.
    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].assign(value)
    }

    pub fn unassign(&mut self, variable: VariableId) {
        quince_assert_simple!(
            self.variables[variable].is_assigned(),
            "Attempted to unassign {variable} which is not assigned"
        );
        self.variables[variable].unassign()
    }

    /// Puts every pruned value back into the current domain of its variable.
    ///
    /// Only prune lists returned by a propagator should be restored, and each list at most once.
    pub fn restore(&mut self, pruned: &[PrunedValue]) {
        for pruned_value in pruned {
            self.variables[pruned_value.variable].restore_value(pruned_value.value);
        }
    }

    /// Unassigns every variable and restores every current domain to the original domain.
    pub fn restore_all(&mut self) {
        for variable in self.variables.iter_mut() {
            variable.unassign();
            variable.restore_current_domain();
        }
    }
}
