pub mod calculate;
pub mod calculate_handler;
pub mod optimize_handler;
pub mod render;
