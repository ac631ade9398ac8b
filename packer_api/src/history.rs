pub mod calculations_handler;
pub mod history_handler;
pub mod render;
