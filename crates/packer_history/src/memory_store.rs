use parking_lot::RwLock;

use crate::{
    calculation::{CalculationRecord, NewCalculation},
    error::HistoryError,
    history_store::{HistoryStore, newest_first},
};

#[derive(Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<CalculationRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, calculation: NewCalculation) -> Result<CalculationRecord, HistoryError> {
        let record = CalculationRecord::new(calculation);
        self.records.write().push(record.clone());
        Ok(record)
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<CalculationRecord>, HistoryError> {
        Ok(newest_first(&self.records.read(), limit, offset))
    }

    fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn calculation(amount: u64) -> NewCalculation {
        NewCalculation {
            pack_sizes: String::from("1"),
            amount,
            packs: BTreeMap::from([(1, amount)]),
            total: amount,
        }
    }

    #[test]
    fn test_memory_store_newest_first() {
        let store = MemoryHistoryStore::new();
        for amount in 1..=5 {
            store.append(calculation(amount)).unwrap();
        }

        let amounts: Vec<u64> = store
            .list(10, 0)
            .unwrap()
            .iter()
            .map(|record| record.amount)
            .collect();
        assert_eq!(amounts, vec![5, 4, 3, 2, 1]);
        assert_eq!(store.count().unwrap(), 5);
    }

    #[test]
    fn test_memory_store_pagination() {
        let store = MemoryHistoryStore::new();
        for amount in 1..=5 {
            store.append(calculation(amount)).unwrap();
        }

        let page: Vec<u64> = store
            .list(2, 2)
            .unwrap()
            .iter()
            .map(|record| record.amount)
            .collect();
        assert_eq!(page, vec![3, 2]);
        assert!(store.list(2, 10).unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_empty() {
        let store = MemoryHistoryStore::new();

        assert!(store.list(50, 0).unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.flush().is_ok());
    }
}
