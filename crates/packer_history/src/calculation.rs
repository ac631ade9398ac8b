use std::collections::BTreeMap;

use jiff::Timestamp;
use packer_optimizer::Allocation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalculation {
    /// Pack sizes exactly as the user entered them.
    pub pack_sizes: String,
    pub amount: u64,
    pub packs: BTreeMap<u64, u64>,
    pub total: u64,
}

impl NewCalculation {
    pub fn from_allocation(pack_sizes: impl Into<String>, amount: u64, allocation: &Allocation) -> Self {
        NewCalculation {
            pack_sizes: pack_sizes.into(),
            amount,
            packs: allocation.packs().clone(),
            total: allocation.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Calculation")]
pub struct CalculationRecord {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub pack_sizes: String,
    pub amount: u64,
    pub packs: BTreeMap<u64, u64>,
    pub total: u64,
}

impl CalculationRecord {
    pub fn new(calculation: NewCalculation) -> Self {
        CalculationRecord {
            id: Uuid::new_v4(),
            created_at: Timestamp::now(),
            pack_sizes: calculation.pack_sizes,
            amount: calculation.amount,
            packs: calculation.packs,
            total: calculation.total,
        }
    }

    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use packer_optimizer::optimize;

    use super::*;

    #[test]
    fn test_calculation_from_allocation() {
        let allocation = optimize(&[250, 500, 1000], 1250).unwrap();
        let calculation = NewCalculation::from_allocation("250, 500, 1000", 1250, &allocation);

        assert_eq!(calculation.pack_sizes, "250, 500, 1000");
        assert_eq!(calculation.total, 1250);
        assert_eq!(calculation.packs, BTreeMap::from([(250, 1), (1000, 1)]));

        let record = CalculationRecord::new(calculation);
        assert_eq!(record.pack_count(), 2);
        assert_eq!(record.amount, 1250);
    }
}
