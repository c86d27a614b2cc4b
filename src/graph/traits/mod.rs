pub mod diameter;
pub mod types;

pub use diameter::DiameterTreeAlgorithms;
pub use types::*;
