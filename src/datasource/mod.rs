//! Data Source Plugin System
//!
//! This module provides the data source infrastructure: read-only,
//! side-effect-free configuration values computed during an
//! infrastructure-configuration evaluation pass. Each data source declares a
//! field [`Schema`](crate::schema::Schema), and its read callback receives
//! validated, default-filled parameters together with a [`ReadContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use envsource::prelude::*;
//! use serde_json::json;
//!
//! let registry = DataSourceRegistry::with_builtins();
//! let context = ReadContext::default();
//!
//! let params = Params::from([("name".to_string(), json!("HOME"))]);
//! let output = registry.read("environment_variable", &params, &context)?;
//! println!("{}", output.get_str("value").unwrap_or(""));
//! ```
//!
//! # Creating Custom Data Sources
//!
//! Implement the [`DataSource`] trait:
//!
//! ```rust,ignore
//! use envsource::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct HostnameDataSource;
//!
//! impl DataSource for HostnameDataSource {
//!     fn name(&self) -> &'static str { "hostname" }
//!     fn description(&self) -> &'static str { "Reads the local hostname" }
//!     fn schema(&self) -> Schema {
//!         Schema::new().field(FieldSpec::string("value").computed())
//!     }
//!     fn read(&self, params: &Params, context: &ReadContext) -> DataSourceResult<ReadOutput> {
//!         // Implementation
//!         Ok(ReadOutput::new("hostname"))
//!     }
//! }
//! ```

pub mod environment_variable;

pub use environment_variable::EnvironmentVariableDataSource;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

use crate::env::{EnvTable, ProcessEnv};
use crate::error::{DataSourceError, DataSourceResult};
use crate::schema::Schema;

/// Parameters passed to a data source read, keyed by schema field name
pub type Params = HashMap<String, serde_json::Value>;

/// Helper trait for extracting typed parameters
pub trait ParamExt {
    /// Get a string parameter
    fn get_string(&self, key: &str) -> Option<String>;
    /// Get a string parameter with a fallback
    fn get_string_or(&self, key: &str, default: &str) -> String;
    /// Get a boolean parameter with a fallback
    fn get_bool_or(&self, key: &str, default: bool) -> bool;
}

impl ParamExt for Params {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| match v {
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(|v| match v {
                serde_json::Value::Bool(b) => Some(*b),
                serde_json::Value::String(s) => match s.to_lowercase().as_str() {
                    "true" | "yes" | "1" | "on" => Some(true),
                    "false" | "no" | "0" | "off" => Some(false),
                    _ => None,
                },
                _ => None,
            })
            .unwrap_or(default)
    }
}

/// Context for data source reads.
///
/// Carries the injected environment table and the host platform's path
/// separator. Defaults read the real process environment and use the
/// compile-time separator; tests override both.
#[derive(Debug, Clone)]
pub struct ReadContext {
    env: Arc<dyn EnvTable>,
    path_separator: char,
}

impl Default for ReadContext {
    fn default() -> Self {
        Self {
            env: Arc::new(ProcessEnv::new()),
            path_separator: MAIN_SEPARATOR,
        }
    }
}

impl ReadContext {
    /// Create a context with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the environment table
    pub fn with_env(mut self, env: impl EnvTable + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Override the host platform's path separator
    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    /// The environment table reads go through
    pub fn env(&self) -> &dyn EnvTable {
        self.env.as_ref()
    }

    /// The host platform's path separator
    pub fn path_separator(&self) -> char {
        self.path_separator
    }
}

/// Result of a successful data source read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOutput {
    /// Identity key of the read resource
    pub id: String,
    /// Computed output fields
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, serde_json::Value>,
}

impl ReadOutput {
    /// Create an output with the given identity key
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: HashMap::new(),
        }
    }

    /// Add an output field
    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Get an output field as a string slice
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Trait that all data sources must implement
pub trait DataSource: Send + Sync + fmt::Debug {
    /// Returns the name of the data source
    fn name(&self) -> &'static str;

    /// Returns a description of what the data source reads
    fn description(&self) -> &'static str;

    /// Returns the field schema of this data source
    fn schema(&self) -> Schema;

    /// Execute the read with validated parameters.
    ///
    /// `params` has already been resolved against [`Self::schema`]: required
    /// fields are present, defaults are filled, values are well-typed. The
    /// read must be free of side effects.
    fn read(&self, params: &Params, context: &ReadContext) -> DataSourceResult<ReadOutput>;
}

/// Registry for looking up data sources by name
#[derive(Debug, Clone)]
pub struct DataSourceRegistry {
    sources: HashMap<String, Arc<dyn DataSource>>,
}

impl DataSourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Create a registry with all built-in data sources
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(EnvironmentVariableDataSource::new());
        registry
    }

    /// Register a data source
    pub fn register<S: DataSource + 'static>(&mut self, source: S) {
        self.sources.insert(source.name().to_string(), Arc::new(source));
    }

    /// Get a data source by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn DataSource>> {
        self.sources.get(name).cloned()
    }

    /// Check if a data source exists
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Get all registered data source names
    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(|s| s.as_str()).collect()
    }

    /// Execute a read by data source name.
    ///
    /// Resolves the data source, validates `params` against its schema, and
    /// invokes its read callback. The first error aborts the read.
    pub fn read(
        &self,
        name: &str,
        params: &Params,
        context: &ReadContext,
    ) -> DataSourceResult<ReadOutput> {
        let source = self
            .get(name)
            .ok_or_else(|| DataSourceError::NotFound(name.to_string()))?;

        let resolved = source.schema().resolve(params)?;
        tracing::debug!(data_source = name, "executing data source read");
        source.read(&resolved, context)
    }
}

impl Default for DataSourceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;
    use serde_json::json;

    #[test]
    fn test_registry_with_builtins() {
        let registry = DataSourceRegistry::with_builtins();

        assert!(registry.contains("environment_variable"));
        assert_eq!(registry.names(), vec!["environment_variable"]);
    }

    #[test]
    fn test_registry_not_found() {
        let registry = DataSourceRegistry::new();
        let context = ReadContext::default();

        let result = registry.read("nonexistent", &Params::new(), &context);
        assert!(matches!(result, Err(DataSourceError::NotFound(_))));
    }

    #[test]
    fn test_registry_validates_before_read() {
        let registry = DataSourceRegistry::with_builtins();
        let context = ReadContext::default();

        // Required `name` missing never reaches the read callback
        let result = registry.read("environment_variable", &Params::new(), &context);
        assert!(matches!(result, Err(DataSourceError::MissingOption(f)) if f == "name"));
    }

    #[test]
    fn test_read_context_builder() {
        let context = ReadContext::new()
            .with_env(StaticEnv::new().with_var("FOO", "bar"))
            .with_path_separator('\\');

        assert_eq!(context.env().get("FOO"), Some("bar".to_string()));
        assert_eq!(context.path_separator(), '\\');
    }

    #[test]
    fn test_param_ext_coercions() {
        let params = Params::from([
            ("s".to_string(), json!("text")),
            ("b".to_string(), json!("Yes")),
            ("n".to_string(), json!(7)),
        ]);

        assert_eq!(params.get_string("s"), Some("text".to_string()));
        assert_eq!(params.get_string("n"), None);
        assert_eq!(params.get_string_or("missing", "fallback"), "fallback");
        assert!(params.get_bool_or("b", false));
        assert!(!params.get_bool_or("missing", false));
    }

    #[test]
    fn test_read_output_accessors() {
        let output = ReadOutput::new("HOME").with_data("value", json!("/home/user"));

        assert_eq!(output.id, "HOME");
        assert_eq!(output.get_str("value"), Some("/home/user"));
        assert_eq!(output.get_str("missing"), None);
    }

    #[test]
    fn test_read_output_serializes_for_the_host() {
        let output = ReadOutput::new("HOME").with_data("value", json!("/home/user"));

        let serialized = serde_json::to_value(&output).unwrap();
        assert_eq!(
            serialized,
            json!({"id": "HOME", "data": {"value": "/home/user"}})
        );
    }
}
