use crate::{
    calculation::{CalculationRecord, NewCalculation},
    error::HistoryError,
};

/// Append-only log of past calculations.
pub trait HistoryStore: Send + Sync {
    fn append(&self, calculation: NewCalculation) -> Result<CalculationRecord, HistoryError>;

    /// Records newest first, skipping the first `offset`.
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<CalculationRecord>, HistoryError>;

    fn count(&self) -> Result<usize, HistoryError>;

    fn flush(&self) -> Result<(), HistoryError> {
        Ok(())
    }
}

/// Newest-first page over records stored in insertion order.
pub(crate) fn newest_first(
    records: &[CalculationRecord],
    limit: usize,
    offset: usize,
) -> Vec<CalculationRecord> {
    records
        .iter()
        .rev()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect()
}
