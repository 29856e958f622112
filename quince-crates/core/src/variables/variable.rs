use std::fmt::Display;

use itertools::Itertools;

use super::DomainStore;
use crate::containers::HashMap;
use crate::quince_asserts::quince_assert_simple;

/// A variable with a fixed original domain, a current domain which shrinks and grows during search,
/// and an optional assigned value.
///
/// The current domain is stored as a presence flag per value of the original domain. An assignment
/// does not touch these flags, it only overrides what the current domain looks like while the
/// variable is assigned.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    domain: Vec<i32>,
    positions: HashMap<i32, usize>,
    present: Vec<bool>,
    size: usize,
    assigned_value: Option<i32>,
}

impl Variable {
    /// Creates an unassigned variable whose current domain is the full `domain`. Repeated values
    /// are only kept at their first position.
    pub(crate) fn new(name: impl Into<String>, domain: impl IntoIterator<Item = i32>) -> Variable {
        let mut positions: HashMap<i32, usize> = HashMap::default();
        let domain = domain
            .into_iter()
            .filter(|value| {
                if positions.contains_key(value) {
                    return false;
                }
                let _ = positions.insert(*value, positions.len());
                true
            })
            .collect::<Vec<_>>();

        Variable {
            name: name.into(),
            size: domain.len(),
            present: vec![true; domain.len()],
            domain,
            positions,
            assigned_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original domain, which never changes.
    pub fn domain(&self) -> &[i32] {
        &self.domain
    }

    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }

    pub fn in_domain(&self, value: i32) -> bool {
        self.positions.contains_key(&value)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_value.is_some()
    }

    pub fn assigned_value(&self) -> Option<i32> {
        self.assigned_value
    }

    /// Assigns `value`, which has to be in the current domain.
    pub(crate) fn assign(&mut self, value: i32) {
        quince_assert_simple!(
            !self.is_assigned(),
            "Attempted to assign {value} to '{}' while it is assigned",
            self.name
        );
        quince_assert_simple!(
            self.in_current_domain(value),
            "Attempted to assign {value} to '{}' which is not in its current domain",
            self.name
        );
        self.assigned_value = Some(value);
    }

    pub(crate) fn unassign(&mut self) {
        self.assigned_value = None;
    }

    /// The position of `value` in the original domain; `action` names the caller in the
    /// assertion message.
    fn position_of(&self, value: i32, action: &str) -> usize {
        let position = self.positions.get(&value).copied();
        quince_assert_simple!(
            position.is_some(),
            "Attempted to {action} {value} for '{}' which is not in its original domain",
            self.name
        );
        position.unwrap_or_default()
    }

    /// Restores every pruned value.
    pub(crate) fn restore_current_domain(&mut self) {
        self.present.iter_mut().for_each(|present| *present = true);
        self.size = self.domain.len();
    }
}

impl DomainStore for Variable {
    fn current_domain(&self) -> Vec<i32> {
        match self.assigned_value {
            Some(value) => vec![value],
            None => self
                .domain
                .iter()
                .zip(&self.present)
                .filter(|(_, present)| **present)
                .map(|(value, _)| *value)
                .collect(),
        }
    }

    fn in_current_domain(&self, value: i32) -> bool {
        match self.assigned_value {
            Some(assigned) => assigned == value,
            None => self
                .positions
                .get(&value)
                .is_some_and(|position| self.present[*position]),
        }
    }

    fn current_domain_size(&self) -> usize {
        if self.is_assigned() {
            1
        } else {
            self.size
        }
    }

    fn prune_value(&mut self, value: i32) {
        quince_assert_simple!(
            !self.is_assigned(),
            "Attempted to prune {value} from '{}' while it is assigned",
            self.name
        );
        let position = self.position_of(value, "prune");
        quince_assert_simple!(
            self.present[position],
            "Attempted to prune {value} from '{}' twice",
            self.name
        );
        self.present[position] = false;
        self.size -= 1;
    }

    fn restore_value(&mut self, value: i32) {
        let position = self.position_of(value, "restore");
        quince_assert_simple!(
            !self.present[position],
            "Attempted to restore {value} to '{}' which was not pruned",
            self.name
        );
        self.present[position] = true;
        self.size += 1;
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.assigned_value {
            Some(value) => write!(f, "{} = {value}", self.name),
            None => write!(f, "{} in {{{}}}", self.name, self.current_domain().iter().join(", ")),
        }
    }
}
