use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of packs used per pack size. Every stored count is greater than zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    packs: BTreeMap<u64, u64>,
    total: u64,
}

impl Allocation {
    pub fn from_packs(packs: BTreeMap<u64, u64>) -> Self {
        let packs: BTreeMap<u64, u64> = packs.into_iter().filter(|&(_, count)| count > 0).collect();
        let total = packs.iter().map(|(size, count)| size * count).sum();

        Allocation { packs, total }
    }

    pub(crate) fn add_pack(&mut self, size: u64) {
        *self.packs.entry(size).or_insert(0) += 1;
        self.total += size;
    }

    pub fn packs(&self) -> &BTreeMap<u64, u64> {
        &self.packs
    }

    pub fn count_of(&self, size: u64) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// Total number of packs across every size.
    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }

    /// Sum of `size * count`, equal to the requested amount.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Pack sizes with their counts, largest size first.
    pub fn iter_descending(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.packs.iter().rev().map(|(&size, &count)| (size, count))
    }
}
