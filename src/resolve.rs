//! Effective-value resolution for environment variables.

use crate::env::EnvTable;
use crate::error::{DataSourceError, DataSourceResult};

/// Resolve the effective value of the environment variable `name`.
///
/// The variable's value wins if non-empty; otherwise a non-empty `default`
/// is returned; otherwise the result is an error when `fail_if_empty` is set
/// and the empty string when it is not. Unset and empty-valued variables are
/// treated identically.
///
/// # Errors
///
/// Returns [`DataSourceError::InvalidArgument`] if `name` is empty, and
/// [`DataSourceError::EnvEmpty`] when the variable and `default` are both
/// empty while `fail_if_empty` is set.
pub fn resolve_value(
    env: &dyn EnvTable,
    name: &str,
    default: &str,
    fail_if_empty: bool,
) -> DataSourceResult<String> {
    if name.is_empty() {
        return Err(DataSourceError::InvalidArgument(
            "the environment variable name was not specified".to_string(),
        ));
    }

    let value = env.get(name).unwrap_or_default();
    if !value.is_empty() {
        tracing::debug!(name, %value, "resolved environment variable");
        return Ok(value);
    }

    if !default.is_empty() {
        tracing::debug!(name, default, "environment variable empty, using default");
        return Ok(default.to_string());
    }

    if fail_if_empty {
        return Err(DataSourceError::EnvEmpty(name.to_string()));
    }

    tracing::debug!(name, "environment variable empty, returning empty value");
    Ok(String::new())
}
