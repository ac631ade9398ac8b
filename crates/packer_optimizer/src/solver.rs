pub mod error;
mod min_packs_table;
mod solve;

pub use solve::{optimize, optimize_sizes};
