//! Builders of [`Csp`](quince_core::Csp) models on top of the Quince propagation core.
//!
//! [`table`] generates the satisfying tuples of common relations; [`tenner`] contains two models
//! of the Tenner grid puzzle which differ in how the row constraints are expressed.
mod error;
pub mod table;
pub mod tenner;

pub use error::TennerError;
pub use tenner::tenner_model_binary;
pub use tenner::tenner_model_nary;
pub use tenner::TennerBoard;
