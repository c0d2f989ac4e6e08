//! JSON Schema for fragment files
//!
//! Generated from [`FragmentFile`] using schemars.

use schemars::schema_for;
use serde_json::json;

use super::fragment::FragmentFile;

pub const SCHEMA_ID: &str = "https://lintrc.github.io/lintrc/schema/v1.json";

/// JSON Schema describing `.lintrc.*` files
pub fn fragment_schema() -> serde_json::Value {
    let schema = schema_for!(FragmentFile);
    let mut schema_json = schema.to_value();

    schema_json["$id"] = json!(SCHEMA_ID);
    schema_json["description"] =
        json!("Configuration fragment for lintrc - validates .lintrc.json, .lintrc.jsonc, .lintrc.toml and lintrc.yaml files");

    schema_json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_fragment_properties() {
        let schema = fragment_schema();
        assert_eq!(schema["$id"], json!(SCHEMA_ID));

        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("ignorePatterns"));
        assert!(properties.contains_key("environments"));
        assert!(properties.contains_key("globals"));
        assert!(properties.contains_key("presets"));
    }
}
