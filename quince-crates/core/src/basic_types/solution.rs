use std::fmt::Display;

use crate::containers::KeyedVec;
use crate::variables::VariableId;
use crate::Csp;

/// A complete assignment found by the search, detached from the network that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    names: KeyedVec<VariableId, String>,
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    /// Captures the assigned values of a fully assigned network.
    pub(crate) fn from_assigned(csp: &Csp) -> Solution {
        let values = csp
            .variables()
            .map(|variable| {
                csp.assigned_value(variable)
                    .expect("a solution can only be captured once every variable is assigned")
            })
            .collect();
        let names = csp
            .variables()
            .map(|variable| csp.variable(variable).name().to_owned())
            .collect();

        Solution { names, values }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// The value assigned to `variable`.
    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    /// Iterates over `(variable, name, value)` in the order in which the variables were created.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &str, i32)> + '_ {
        self.values
            .keys()
            .map(|variable| (variable, self.names[variable].as_str(), self.values[variable]))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
