use crate::problem::{allocation::Allocation, pack_sizes::PackSizes};

const UNREACHABLE: u32 = u32::MAX;

/// Dynamic programming table over every amount in `0..=amount`.
///
/// `min_packs[i]` holds the fewest packs summing exactly to `i`, and
/// `choice_at[i]` the pack size that last improved it. Sizes are visited in
/// ascending order and an entry is only replaced on a strict improvement, so
/// among equally small allocations the first one discovered wins.
pub(crate) struct MinPacksTable {
    min_packs: Vec<u32>,
    choice_at: Vec<u32>,
}

impl MinPacksTable {
    /// `amount` must be strictly below `u32::MAX`.
    pub fn build(pack_sizes: &PackSizes, amount: usize) -> Self {
        let mut min_packs = vec![UNREACHABLE; amount + 1];
        let mut choice_at = vec![0u32; amount + 1];
        min_packs[0] = 0;

        for size in pack_sizes.iter() {
            let Ok(size) = usize::try_from(size) else {
                break;
            };

            if size > amount {
                break;
            }

            for i in size..=amount {
                let previous = min_packs[i - size];
                if previous != UNREACHABLE && previous + 1 < min_packs[i] {
                    min_packs[i] = previous + 1;
                    choice_at[i] = size as u32;
                }
            }
        }

        MinPacksTable {
            min_packs,
            choice_at,
        }
    }

    pub fn min_packs(&self, amount: usize) -> Option<u32> {
        match self.min_packs.get(amount) {
            Some(&UNREACHABLE) | None => None,
            Some(&count) => Some(count),
        }
    }

    /// Walks the recorded choices back from `amount` to zero.
    pub fn reconstruct(&self, amount: usize) -> Option<Allocation> {
        self.min_packs(amount)?;

        let mut allocation = Allocation::default();
        let mut current = amount;
        while current > 0 {
            let size = self.choice_at[current] as usize;
            debug_assert!(size > 0 && size <= current);

            allocation.add_pack(size as u64);
            current -= size;
        }

        Some(allocation)
    }
}
