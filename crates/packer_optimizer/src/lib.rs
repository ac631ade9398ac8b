pub mod json;
pub mod parsers;
pub mod problem;
pub mod solver;

pub use problem::{allocation::Allocation, pack_sizes::PackSizes};
pub use solver::{error::OptimizeError, optimize};
