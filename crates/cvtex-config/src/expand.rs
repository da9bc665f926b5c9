//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Only the braced form is recognised; a bare `$VAR` is kept as written.
/// An unset variable without a default is an error naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| UnsetVar(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("pdflatex", "compiler.program").unwrap(), "pdflatex");
    }

    #[test]
    fn test_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CVTEX_TEST_TEXBIN", "/opt/texlive/bin");
        }
        let result = expand_env("${CVTEX_TEST_TEXBIN}/pdflatex", "compiler.program").unwrap();
        assert_eq!(result, "/opt/texlive/bin/pdflatex");
        unsafe {
            std::env::remove_var("CVTEX_TEST_TEXBIN");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CVTEX_TEST_OUT_UNSET");
        }
        let result = expand_env("${CVTEX_TEST_OUT_UNSET:-build}", "output.dir").unwrap();
        assert_eq!(result, "build");
    }

    #[test]
    fn test_unset_without_default_is_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CVTEX_TEST_MISSING");
        }
        let err = expand_env("${CVTEX_TEST_MISSING}", "converter.program").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("CVTEX_TEST_MISSING"));
        assert!(message.contains("converter.program"));
    }

    #[test]
    fn test_bare_dollar_kept() {
        assert_eq!(expand_env("out/$HOME", "output.dir").unwrap(), "out/$HOME");
    }
}
