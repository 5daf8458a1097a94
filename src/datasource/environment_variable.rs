//! Environment Variable Data Source
//!
//! Reads an environment variable with an optional default, an optional
//! fail-if-empty policy, and optional backslash normalization for Windows
//! path values.
//!
//! # Usage
//!
//! ```yaml
//! # Read a variable, failing the evaluation if it is unset
//! data "environment_variable" "java_home" {
//!   name          = "JAVA_HOME"
//!   fail_if_empty = true
//! }
//!
//! # Read a Windows path, doubling unescaped backslashes
//! data "environment_variable" "temp_dir" {
//!   name                = "TEMP"
//!   default             = "c:\\windows\\temp"
//!   normalize_file_path = true
//! }
//! ```

use super::{DataSource, ParamExt, Params, ReadContext, ReadOutput};
use crate::error::DataSourceResult;
use crate::pathnorm::normalize_backslashes;
use crate::resolve::resolve_value;
use crate::schema::{FieldSpec, Schema};

/// Typed request extracted from the host's dynamic parameter map.
///
/// The resolver and normalizer only ever see these plain fields.
#[derive(Debug, Clone)]
struct EnvironmentVariableRequest {
    name: String,
    default: String,
    fail_if_empty: bool,
    normalize_file_path: bool,
}

impl EnvironmentVariableRequest {
    fn from_params(params: &Params) -> Self {
        Self {
            name: params.get_string_or("name", ""),
            default: params.get_string_or("default", ""),
            fail_if_empty: params.get_bool_or("fail_if_empty", false),
            normalize_file_path: params.get_bool_or("normalize_file_path", false),
        }
    }
}

/// Environment variable data source
#[derive(Debug, Clone, Default)]
pub struct EnvironmentVariableDataSource;

impl EnvironmentVariableDataSource {
    /// Create a new EnvironmentVariableDataSource instance
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for EnvironmentVariableDataSource {
    fn name(&self) -> &'static str {
        "environment_variable"
    }

    fn description(&self) -> &'static str {
        "Reads an environment variable with default fallback and fail-if-empty policy"
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .field(
                FieldSpec::string("name")
                    .required()
                    .description("The name of the environment variable to read"),
            )
            .field(
                FieldSpec::string("value")
                    .computed()
                    .description("The effective value of the environment variable"),
            )
            .field(
                FieldSpec::string("default")
                    .with_default("")
                    .description("The default value to return if the variable value is empty"),
            )
            .field(
                FieldSpec::bool("fail_if_empty").with_default(false).description(
                    "If true, an error will be generated if the variable value and its \
                     default value are empty",
                ),
            )
            .field(
                FieldSpec::bool("normalize_file_path")
                    .with_default(false)
                    .description(
                        "If true, unescaped backslashes in the value are doubled on \
                         platforms whose path separator is a backslash",
                    ),
            )
    }

    fn read(&self, params: &Params, context: &ReadContext) -> DataSourceResult<ReadOutput> {
        let request = EnvironmentVariableRequest::from_params(params);

        let mut value = resolve_value(
            context.env(),
            &request.name,
            &request.default,
            request.fail_if_empty,
        )?;

        if request.normalize_file_path && context.path_separator() == '\\' {
            value = normalize_backslashes(&value);
        }

        Ok(ReadOutput::new(request.name.as_str())
            .with_data("value", serde_json::Value::String(value)))
    }
}
