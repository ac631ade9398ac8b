use schemars::schema_for;

use crate::json::types;

/// Schema of the optimization request body.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonPackRequest))
}

/// Schema of the allocation returned for a feasible request.
pub fn generate_allocation_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonAllocation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_json_schema() {
        let schema: serde_json::Value = serde_json::from_str(&generate_json_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "PackRequest");
        assert!(schema["properties"]["pack_sizes"].is_object());
        assert!(schema["properties"]["amount"].is_object());
    }

    #[test]
    fn test_generate_allocation_json_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_allocation_json_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "Allocation");
        assert!(schema["properties"]["packs"].is_object());
        assert!(schema["properties"]["pack_count"].is_object());
    }
}
