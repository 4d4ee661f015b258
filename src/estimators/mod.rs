pub mod entropy;
pub mod mutual_information;
pub mod conditional_entropy;
pub mod traits;
pub mod approaches;

pub use traits::{GlobalValue, LocalValues};
