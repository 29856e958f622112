mod model_error;
mod propagation_status;
mod solution;

pub use model_error::ModelError;
pub use propagation_status::Deadend;
pub use propagation_status::PropagationResult;
pub use propagation_status::PropagationStatus;
pub use propagation_status::PrunedValue;
pub use solution::Solution;
