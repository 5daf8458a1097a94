//! Field schema descriptors for data sources.
//!
//! Each data source declares its fields as a [`Schema`]: the field types,
//! whether they are required, optional, or computed, their defaults, and a
//! short description. The registry validates incoming parameters against the
//! schema and fills defaults before the data source's read callback runs, so
//! plugin code only ever sees well-typed, fully populated parameters.

use std::collections::HashMap;

use crate::error::{DataSourceError, DataSourceResult};

/// Type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string value
    String,
    /// Boolean value; boolean-ish strings are coerced
    Bool,
}

impl FieldType {
    fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Bool => "bool",
        }
    }
}

/// Declaration of a single data source field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name
    pub name: &'static str,
    /// Field type
    pub field_type: FieldType,
    /// Human-readable description
    pub description: &'static str,
    /// Whether the field must be supplied by the caller
    pub required: bool,
    /// Whether the field is produced by the read and cannot be supplied
    pub computed: bool,
    /// Default value filled in when an optional field is absent
    pub default: Option<serde_json::Value>,
}

impl FieldSpec {
    /// Declare a string field
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            description: "",
            required: false,
            computed: false,
            default: None,
        }
    }

    /// Declare a boolean field
    pub fn bool(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Bool,
            description: "",
            required: false,
            computed: false,
            default: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as computed output
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Check `value` against this field's type, coercing where the
    /// declarative host conventionally allows it.
    fn check(&self, value: &serde_json::Value) -> DataSourceResult<serde_json::Value> {
        match (self.field_type, value) {
            (FieldType::String, serde_json::Value::String(_)) => Ok(value.clone()),
            (FieldType::Bool, serde_json::Value::Bool(_)) => Ok(value.clone()),
            (FieldType::Bool, serde_json::Value::String(s)) => {
                match s.to_lowercase().as_str() {
                    "true" | "yes" | "1" | "on" => Ok(serde_json::Value::Bool(true)),
                    "false" | "no" | "0" | "off" => Ok(serde_json::Value::Bool(false)),
                    _ => Err(DataSourceError::InvalidOption {
                        option: self.name.to_string(),
                        message: format!("'{}' is not a boolean", s),
                    }),
                }
            }
            _ => Err(DataSourceError::InvalidOption {
                option: self.name.to_string(),
                message: format!("expected a {} value", self.field_type.as_str()),
            }),
        }
    }
}

/// Ordered set of field declarations for one data source
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field declaration
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// All declared fields, in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field declaration by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate `params` against this schema and return the resolved
    /// parameter map: unknown and computed fields rejected, required fields
    /// enforced, values type-checked and coerced, defaults filled.
    pub fn resolve(
        &self,
        params: &HashMap<String, serde_json::Value>,
    ) -> DataSourceResult<HashMap<String, serde_json::Value>> {
        for key in params.keys() {
            match self.get(key) {
                None => return Err(DataSourceError::UnknownOption(key.clone())),
                Some(spec) if spec.computed => {
                    return Err(DataSourceError::InvalidOption {
                        option: key.clone(),
                        message: "computed field cannot be set".to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        let mut resolved = HashMap::new();
        for spec in &self.fields {
            if spec.computed {
                continue;
            }
            match params.get(spec.name) {
                Some(value) => {
                    resolved.insert(spec.name.to_string(), spec.check(value)?);
                }
                None if spec.required => {
                    return Err(DataSourceError::MissingOption(spec.name.to_string()));
                }
                None => {
                    if let Some(default) = &spec.default {
                        resolved.insert(spec.name.to_string(), default.clone());
                    }
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new()
            .field(FieldSpec::string("name").required())
            .field(FieldSpec::string("value").computed())
            .field(FieldSpec::string("default").with_default(""))
            .field(FieldSpec::bool("strict").with_default(false))
    }

    #[test]
    fn test_defaults_are_filled() {
        let schema = sample_schema();
        let params = HashMap::from([("name".to_string(), json!("HOME"))]);

        let resolved = schema.resolve(&params).unwrap();
        assert_eq!(resolved.get("name"), Some(&json!("HOME")));
        assert_eq!(resolved.get("default"), Some(&json!("")));
        assert_eq!(resolved.get("strict"), Some(&json!(false)));
        assert!(!resolved.contains_key("value"));
    }

    #[test]
    fn test_missing_required_field() {
        let schema = sample_schema();

        let result = schema.resolve(&HashMap::new());
        assert!(matches!(result, Err(DataSourceError::MissingOption(f)) if f == "name"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let schema = sample_schema();
        let params = HashMap::from([
            ("name".to_string(), json!("HOME")),
            ("nmae".to_string(), json!("typo")),
        ]);

        let result = schema.resolve(&params);
        assert!(matches!(result, Err(DataSourceError::UnknownOption(f)) if f == "nmae"));
    }

    #[test]
    fn test_computed_field_cannot_be_set() {
        let schema = sample_schema();
        let params = HashMap::from([
            ("name".to_string(), json!("HOME")),
            ("value".to_string(), json!("forced")),
        ]);

        let result = schema.resolve(&params);
        assert!(matches!(
            result,
            Err(DataSourceError::InvalidOption { option, .. }) if option == "value"
        ));
    }

    #[test]
    fn test_boolean_string_coercion() {
        let schema = sample_schema();
        for (raw, expected) in [("yes", true), ("FALSE", false), ("1", true), ("off", false)] {
            let params = HashMap::from([
                ("name".to_string(), json!("HOME")),
                ("strict".to_string(), json!(raw)),
            ]);

            let resolved = schema.resolve(&params).unwrap();
            assert_eq!(resolved.get("strict"), Some(&json!(expected)), "raw={raw}");
        }
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let schema = sample_schema();
        let params = HashMap::from([("name".to_string(), json!(42))]);

        let result = schema.resolve(&params);
        assert!(matches!(
            result,
            Err(DataSourceError::InvalidOption { option, .. }) if option == "name"
        ));

        let params = HashMap::from([
            ("name".to_string(), json!("HOME")),
            ("strict".to_string(), json!("maybe")),
        ]);
        assert!(schema.resolve(&params).is_err());
    }
}
