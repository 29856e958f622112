//! Strategies which select the next variable to assign.
mod input_order;
mod minimum_remaining_values;
mod variable_selector;

pub use input_order::InputOrder;
pub use minimum_remaining_values::minimum_remaining_values;
pub use minimum_remaining_values::MinimumRemainingValues;
pub use variable_selector::VariableSelector;
