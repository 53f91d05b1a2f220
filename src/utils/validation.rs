use crate::utils::error::{AtbError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AtbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AtbError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AtbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AtbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AtbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks `value` against an anchored pattern, e.g. `D.M.YYYY` dates.
pub fn validate_pattern(field_name: &str, value: &str, pattern: &str, expected: &str) -> Result<()> {
    let re = Regex::new(pattern).map_err(|e| AtbError::ConfigError {
        field: field_name.to_string(),
        message: format!("invalid pattern: {}", e),
    })?;

    if !re.is_match(value) {
        return Err(AtbError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected format {}", expected),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("suggest_endpoint", "https://rp.atb.no/StageJSON").is_ok());
        assert!(validate_url("suggest_endpoint", "http://localhost:8080/").is_ok());
        assert!(validate_url("suggest_endpoint", "").is_err());
        assert!(validate_url("suggest_endpoint", "invalid-url").is_err());
        assert!(validate_url("suggest_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("display.spacing", 3, 1).is_ok());
        assert!(validate_positive_number("display.spacing", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("from", "Solsiden").is_ok());
        assert!(validate_non_empty_string("from", "   ").is_err());
    }

    #[test]
    fn test_validate_pattern() {
        let date = r"^\d{1,2}\.\d{1,2}\.\d{4}$";
        assert!(validate_pattern("date", "5.4.2019", date, "D.M.YYYY").is_ok());
        assert!(validate_pattern("date", "05.04.2019", date, "D.M.YYYY").is_ok());
        assert!(validate_pattern("date", "2019-04-05", date, "D.M.YYYY").is_err());
    }
}
