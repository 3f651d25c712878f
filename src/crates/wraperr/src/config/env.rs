//! Environment variable loading utilities

use crate::{ConfigError, Result};
use std::env;
use std::str::FromStr;

/// Load an environment variable as a string
///
/// * `Ok(Some(value))` if variable exists
/// * `Ok(None)` if variable doesn't exist
/// * `Err` if variable exists but has invalid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}

/// Load and parse an environment variable
///
/// ```rust,ignore
/// let depth: Option<usize> = get_env_parse("WRAPERR_MAX_DEPTH")?;
/// ```
pub fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(key)? {
        Some(val) => {
            let parsed = val.trim().parse::<T>().map_err(|e| ConfigError::Parse {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Load a boolean environment variable
///
/// Recognizes: "true", "1", "yes", "on" (case-insensitive) as true
/// Recognizes: "false", "0", "no", "off" (case-insensitive) as false
pub fn get_env_bool(key: &str) -> Result<Option<bool>> {
    match get_env(key)? {
        Some(val) => {
            let result = match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        key: key.to_string(),
                        value: val,
                    })
                }
            };
            Ok(Some(result))
        }
        None => Ok(None),
    }
}

/// Build a prefixed environment variable name
///
/// ```rust
/// use wraperr::config::build_env_key;
///
/// assert_eq!(build_env_key("WRAPERR_", "max_depth"), "WRAPERR_MAX_DEPTH");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_missing() {
        let result = get_env("WRAPERR_TEST_MISSING_VAR_12345");
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_get_env_parse() {
        env::set_var("WRAPERR_TEST_NUMBER", " 42 ");
        let result: Option<usize> = get_env_parse("WRAPERR_TEST_NUMBER").unwrap();
        assert_eq!(result, Some(42));
        env::remove_var("WRAPERR_TEST_NUMBER");
    }

    #[test]
    fn test_get_env_parse_invalid() {
        env::set_var("WRAPERR_TEST_INVALID_NUMBER", "not_a_number");
        let result: Result<Option<usize>> = get_env_parse("WRAPERR_TEST_INVALID_NUMBER");
        match result {
            Err(ConfigError::Parse { key, .. }) => assert_eq!(key, "WRAPERR_TEST_INVALID_NUMBER"),
            other => panic!("unexpected result: {:?}", other),
        }
        env::remove_var("WRAPERR_TEST_INVALID_NUMBER");
    }

    #[test]
    fn test_get_env_bool() {
        let test_cases = vec![
            ("true", true),
            ("TRUE", true),
            ("1", true),
            ("yes", true),
            ("on", true),
            ("false", false),
            ("FALSE", false),
            ("0", false),
            ("no", false),
            ("off", false),
        ];

        for (value, expected) in test_cases {
            env::set_var("WRAPERR_TEST_BOOL", value);
            let result = get_env_bool("WRAPERR_TEST_BOOL").unwrap();
            assert_eq!(result, Some(expected), "Failed for value: {}", value);
        }

        env::remove_var("WRAPERR_TEST_BOOL");
    }

    #[test]
    fn test_get_env_bool_invalid() {
        env::set_var("WRAPERR_TEST_BOOL_INVALID", "maybe");
        let result = get_env_bool("WRAPERR_TEST_BOOL_INVALID");
        assert!(matches!(result, Err(ConfigError::InvalidBool { .. })));
        env::remove_var("WRAPERR_TEST_BOOL_INVALID");
    }

    #[test]
    fn test_build_env_key() {
        assert_eq!(build_env_key("WRAPERR_", "frames"), "WRAPERR_FRAMES");
        assert_eq!(build_env_key("", "max_depth"), "MAX_DEPTH");
    }
}
