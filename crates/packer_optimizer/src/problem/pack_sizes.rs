use crate::solver::error::OptimizeError;

/// Validated set of pack sizes, deduplicated and sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSizes(Vec<u64>);

impl PackSizes {
    pub fn new(sizes: &[i64]) -> Result<Self, OptimizeError> {
        if sizes.is_empty() {
            return Err(OptimizeError::EmptyPackSizes);
        }

        if sizes.iter().any(|&size| size <= 0) {
            return Err(OptimizeError::NonPositivePackSize);
        }

        let mut sizes: Vec<u64> = sizes.iter().map(|&size| size.unsigned_abs()).collect();
        sizes.sort_unstable();
        sizes.dedup();

        Ok(PackSizes(sizes))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn smallest(&self) -> u64 {
        // never empty once constructed
        self.0[0]
    }
}
