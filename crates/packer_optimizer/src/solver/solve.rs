use tracing::{Level, debug, instrument};

use crate::problem::{allocation::Allocation, pack_sizes::PackSizes};

use super::{error::OptimizeError, min_packs_table::MinPacksTable};

/// Finds the allocation of packs summing exactly to `amount` with the fewest
/// packs. Every size may be used any number of times.
///
/// Validation happens in order: empty sizes, then a non-positive amount, then
/// non-positive sizes. The result is deterministic for a given input, regardless
/// of the order or repetition of `pack_sizes`.
pub fn optimize(pack_sizes: &[i64], amount: i64) -> Result<Allocation, OptimizeError> {
    if pack_sizes.is_empty() {
        return Err(OptimizeError::EmptyPackSizes);
    }

    if amount <= 0 {
        return Err(OptimizeError::NonPositiveAmount);
    }

    let pack_sizes = PackSizes::new(pack_sizes)?;
    optimize_sizes(&pack_sizes, amount.unsigned_abs())
}

#[instrument(skip(pack_sizes), level = Level::DEBUG)]
pub fn optimize_sizes(pack_sizes: &PackSizes, amount: u64) -> Result<Allocation, OptimizeError> {
    if amount == 0 {
        return Err(OptimizeError::NonPositiveAmount);
    }

    if amount >= u64::from(u32::MAX) {
        return Err(OptimizeError::AmountTooLarge);
    }

    let amount = usize::try_from(amount).map_err(|_| OptimizeError::AmountTooLarge)?;

    if (amount as u64) < pack_sizes.smallest() {
        return Err(OptimizeError::Infeasible);
    }

    let table = MinPacksTable::build(pack_sizes, amount);
    let allocation = table
        .reconstruct(amount)
        .ok_or(OptimizeError::Infeasible)?;

    debug!(
        packs = allocation.pack_count(),
        sizes = allocation.packs().len(),
        "found allocation"
    );

    Ok(allocation)
}
