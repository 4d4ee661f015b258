pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// infotheory::estimators::approaches::* ergonomically.
pub use discrete::joint::DiscreteJointEntropy;
pub use discrete::shannon::DiscreteEntropy;
pub use discrete::{DiscreteConditionalEntropy, DiscreteMutualInformation};
