//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test owns a unique variable name, so no other
    // thread reads or writes it concurrently.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_NOBEL_ENV_PARSE_VALID_41021";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_trims_whitespace() {
        let var_name = "TEST_NOBEL_ENV_PARSE_TRIM_41022";
        unsafe { std::env::set_var(var_name, " 75 ") };
        let result: usize = env_parse_with_default(var_name, 150);
        assert_eq!(result, 75);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_NOBEL_ENV_PARSE_INVALID_41023";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_negative_for_unsigned() {
        let var_name = "TEST_NOBEL_ENV_PARSE_NEGATIVE_41025";
        unsafe { std::env::set_var(var_name, "-600") };
        let result: u32 = env_parse_with_default(var_name, 600);
        assert_eq!(result, 600);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_NOBEL_ENV_PARSE_MISSING_41024";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }
}
