pub mod calculation;
pub mod error;
pub mod file_store;
pub mod history_store;
pub mod memory_store;

pub use calculation::{CalculationRecord, NewCalculation};
pub use error::HistoryError;
pub use file_store::FileHistoryStore;
pub use history_store::HistoryStore;
pub use memory_store::MemoryHistoryStore;
