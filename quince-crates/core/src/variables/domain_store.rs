/// The operations the propagators need on the current domain of a variable.
///
/// The current domain is a subset of the original domain of the variable. Pruning removes a single
/// value from it and restoring puts a single value back; propagators never observe the underlying
/// representation.
pub trait DomainStore {
    /// The values in the current domain, in the order of the original domain.
    ///
    /// For an assigned variable this is exactly the assigned value.
    fn current_domain(&self) -> Vec<i32>;

    /// Whether `value` is in the current domain. Values outside of the original domain are never
    /// in the current domain.
    fn in_current_domain(&self, value: i32) -> bool;

    /// The number of values in the current domain; this is 1 for an assigned variable.
    fn current_domain_size(&self) -> usize;

    /// Removes `value` from the current domain.
    ///
    /// The value has to be present and the variable may not be assigned.
    fn prune_value(&mut self, value: i32);

    /// Puts a previously pruned `value` back into the current domain.
    fn restore_value(&mut self, value: i32);
}
