use std::sync::Arc;

use packer_history::{HistoryStore, NewCalculation};
use tracing::warn;

pub struct AppState {
    pub history: Arc<dyn HistoryStore>,
    pub max_amount: u64,
}

impl AppState {
    /// Saves a calculation before the response is sent. Failures are only logged.
    pub async fn record(&self, calculation: NewCalculation) {
        let history = Arc::clone(&self.history);
        let result = tokio::task::spawn_blocking(move || history.append(calculation)).await;

        match result {
            Ok(Ok(_)) => {}
            Ok(Err(error)) => warn!(%error, "failed to save calculation"),
            Err(error) => warn!(%error, "history task failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use packer_history::{CalculationRecord, HistoryError, MemoryHistoryStore};

    use super::*;

    struct FailingHistoryStore;

    impl HistoryStore for FailingHistoryStore {
        fn append(&self, _: NewCalculation) -> Result<CalculationRecord, HistoryError> {
            Err(HistoryError::Io(std::io::Error::other("disk full")))
        }

        fn list(&self, _: usize, _: usize) -> Result<Vec<CalculationRecord>, HistoryError> {
            Ok(Vec::new())
        }

        fn count(&self) -> Result<usize, HistoryError> {
            Ok(0)
        }
    }

    fn calculation() -> NewCalculation {
        let allocation = packer_optimizer::optimize(&[10], 100).unwrap();
        NewCalculation::from_allocation(String::from("10"), 100, &allocation)
    }

    #[tokio::test]
    async fn test_record_is_visible_once_awaited() {
        let history = Arc::new(MemoryHistoryStore::new());
        let state = AppState {
            history: history.clone(),
            max_amount: 1_000,
        };

        state.record(calculation()).await;

        assert_eq!(history.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_record_swallows_store_errors() {
        let state = AppState {
            history: Arc::new(FailingHistoryStore),
            max_amount: 1_000,
        };

        state.record(calculation()).await;
    }
}
