//! Terraform output records as emitted by `terraform output -json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outputs keyed by their assigned name.
pub type Outputs = BTreeMap<String, OutputRecord>;

/// A single output with its Terraform metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Whether Terraform has marked this value as sensitive
    pub sensitive: bool,
    /// The type of the value (string, number, list, ...)
    #[serde(rename = "type")]
    pub value_type: Value,
    /// The value of the output as interpolated by Terraform
    pub value: Value,
}

/// Successful result payload, serialized as `{"outputs": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputsResult {
    pub outputs: Outputs,
}

impl OutputsResult {
    pub fn new(outputs: Outputs) -> Self {
        Self { outputs }
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Look up the value of a named output.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name).map(|record| &record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_terraform_payload() {
        let payload = r#"{"bukkit_arn": {"sensitive": false, "type": "string", "value": "arn:aws:s3:::tf-test-bukkit"}}"#;
        let outputs: Outputs = serde_json::from_str(payload).unwrap();

        let record = &outputs["bukkit_arn"];
        assert!(!record.sensitive);
        assert_eq!(record.value_type, json!("string"));
        assert_eq!(record.value, json!("arn:aws:s3:::tf-test-bukkit"));
    }

    #[test]
    fn test_complex_types_are_kept_verbatim() {
        let payload = r#"{
            "subnets": {"sensitive": false, "type": ["list", "string"], "value": ["a", "b"]},
            "db_password": {"sensitive": true, "type": "string", "value": "hunter2"}
        }"#;
        let outputs: Outputs = serde_json::from_str(payload).unwrap();

        assert_eq!(outputs["subnets"].value_type, json!(["list", "string"]));
        assert_eq!(outputs["subnets"].value, json!(["a", "b"]));
        assert!(outputs["db_password"].sensitive);
    }

    #[test]
    fn test_result_serializes_under_outputs_key() {
        let result = OutputsResult::default();
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"outputs": {}}));
        assert!(result.is_empty());
    }
}
