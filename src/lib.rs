//! # Envsource - Environment Variable Data Source Plugin
//!
//! Envsource exposes a single read-only data source for declarative
//! infrastructure-configuration tools: given an environment variable name,
//! return its value, falling back to a caller-supplied default, optionally
//! failing if both are empty, and optionally doubling unescaped backslashes
//! for Windows-style path values.
//!
//! ## Core Concepts
//!
//! - **Data source**: a side-effect-free read evaluated once per
//!   configuration pass, declared by a field [`schema::Schema`]
//! - **Resolver**: the value → default → error policy in
//!   [`resolve::resolve_value`]
//! - **Path normalizer**: the pairwise backslash-doubling scan in
//!   [`pathnorm::normalize_backslashes`]
//! - **Environment table**: the injected read-only lookup capability in
//!   [`env::EnvTable`], so evaluation is deterministic under test
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use envsource::prelude::*;
//! use serde_json::json;
//!
//! let registry = DataSourceRegistry::with_builtins();
//! let context = ReadContext::default();
//!
//! let params = Params::from([
//!     ("name".to_string(), json!("JAVA_HOME")),
//!     ("default".to_string(), json!("/usr/lib/jvm/default")),
//! ]);
//! let output = registry.read("environment_variable", &params, &context)?;
//! println!("JAVA_HOME = {}", output.get_str("value").unwrap_or(""));
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod datasource;
pub mod env;
pub mod error;
pub mod pathnorm;
pub mod resolve;
pub mod schema;

pub use error::{DataSourceError, DataSourceResult};

/// Convenient re-exports of commonly used types and traits.
pub mod prelude {
    pub use crate::datasource::{
        DataSource, DataSourceRegistry, EnvironmentVariableDataSource, ParamExt, Params,
        ReadContext, ReadOutput,
    };
    pub use crate::env::{EnvTable, ProcessEnv, StaticEnv};
    pub use crate::error::{DataSourceError, DataSourceResult};
    pub use crate::pathnorm::normalize_backslashes;
    pub use crate::resolve::resolve_value;
    pub use crate::schema::{FieldSpec, FieldType, Schema};
}
