use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    problem::allocation::Allocation,
    solver::{error::OptimizeError, optimize},
};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PackRequest")]
pub struct JsonPackRequest {
    /// Available pack sizes, each usable any number of times.
    pub pack_sizes: Vec<i64>,
    /// Exact number of items to fulfil.
    pub amount: i64,
}

impl JsonPackRequest {
    #[instrument(skip_all, level = "debug")]
    pub fn solve(&self) -> Result<Allocation, OptimizeError> {
        optimize(&self.pack_sizes, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Pack")]
pub struct JsonPack {
    pub size: u64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Allocation")]
pub struct JsonAllocation {
    /// Packs used, largest size first.
    pub packs: Vec<JsonPack>,
    pub pack_count: u64,
    pub total: u64,
}

impl From<&Allocation> for JsonAllocation {
    fn from(allocation: &Allocation) -> Self {
        JsonAllocation {
            packs: allocation
                .iter_descending()
                .map(|(size, count)| JsonPack { size, count })
                .collect(),
            pack_count: allocation.pack_count(),
            total: allocation.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_request_solve() {
        let request: JsonPackRequest =
            serde_json::from_str(r#"{ "pack_sizes": [250, 500, 1000, 2000, 5000], "amount": 12001 }"#)
                .unwrap();

        let allocation = request.solve();
        assert_eq!(allocation, Err(OptimizeError::Infeasible));
    }

    #[test]
    fn test_json_request_rejects_unknown_fields() {
        let request =
            serde_json::from_str::<JsonPackRequest>(r#"{ "pack_sizes": [5], "amount": 5, "x": 1 }"#);

        assert!(request.is_err());
    }

    #[test]
    fn test_json_allocation_from_allocation() {
        let request = JsonPackRequest {
            pack_sizes: vec![23, 31, 53],
            amount: 500_000,
        };
        let allocation = request.solve().unwrap();

        let json = serde_json::to_value(JsonAllocation::from(&allocation)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "packs": [
                    { "size": 53, "count": 9429 },
                    { "size": 31, "count": 7 },
                    { "size": 23, "count": 2 },
                ],
                "pack_count": 9438,
                "total": 500000,
            })
        );
    }
}
