use packer_optimizer::{Allocation, OptimizeError, optimize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CalculateError {
    #[error(transparent)]
    Optimize(#[from] OptimizeError),

    #[error("amount must not exceed {0}")]
    AmountAboveLimit(u64),

    #[error("calculation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Rejects amounts above `max_amount`, then runs the optimizer on the blocking pool.
pub async fn calculate(
    pack_sizes: Vec<i64>,
    amount: i64,
    max_amount: u64,
) -> Result<Allocation, CalculateError> {
    if !pack_sizes.is_empty() && amount > 0 && amount.unsigned_abs() > max_amount {
        return Err(CalculateError::AmountAboveLimit(max_amount));
    }

    let allocation = tokio::task::spawn_blocking(move || optimize(&pack_sizes, amount)).await??;

    info!(
        amount,
        packs = allocation.pack_count(),
        "calculated allocation"
    );

    Ok(allocation)
}
