use lazy_static::lazy_static;
use probe_lib::HttpMethod;
use regex::Regex;

lazy_static! {
    static ref ENDPOINT_NAME_REGEX: Regex = Regex::new(r"^[^\x00-\x1f\x7f]+$").unwrap();
}

pub fn validate_endpoint_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name required".to_string());
    }
    if trimmed.chars().count() > 100 {
        return Err("Name must be 100 characters or less".to_string());
    }
    if !ENDPOINT_NAME_REGEX.is_match(trimmed) {
        return Err("Name must not contain control characters".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn validate_method(method: &str) -> Result<HttpMethod, String> {
    method.parse::<HttpMethod>().map_err(|e| {
        let allowed: Vec<&str> = HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
        format!("{e} (expected one of {})", allowed.join(", "))
    })
}

pub fn validate_timeout(secs: &str) -> Result<f64, String> {
    let value: f64 = secs
        .parse()
        .map_err(|_| format!("Timeout value '{secs}' must be a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Timeout value '{secs}' must be greater than zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_name() {
        assert_eq!(validate_endpoint_name("Get users").unwrap(), "Get users");
        assert_eq!(validate_endpoint_name("  padded  ").unwrap(), "padded");
        assert!(validate_endpoint_name("users/list-v2").is_ok());

        assert!(validate_endpoint_name("").is_err());
        assert!(validate_endpoint_name("   ").is_err());
        assert!(validate_endpoint_name("bad\tname").is_err());
        assert!(validate_endpoint_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_method() {
        assert_eq!(validate_method("patch").unwrap(), HttpMethod::PATCH);
        let err = validate_method("HEAD").unwrap_err();
        assert!(err.contains("GET, POST, PUT, PATCH, DELETE"));
    }

    #[test]
    fn test_validate_timeout() {
        assert_eq!(validate_timeout("1.5").unwrap(), 1.5);
        assert!(validate_timeout("0").is_err());
        assert!(validate_timeout("-2").is_err());
        assert!(validate_timeout("soon").is_err());
    }
}
