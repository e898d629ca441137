use crate::error::{Error, Result};
use serde_json::Value;

/// Pull the analysis text out of an advisory service response body.
pub fn extract_analysis(json: &str, field: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::FieldNotString(field.to_string())),
        None => Err(Error::MissingField(field.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_default_field() {
        let body = r###"{"analysis": "## Summary\n- a", "confidence_score": 0.8}"###;
        assert_eq!(extract_analysis(body, "analysis").unwrap(), "## Summary\n- a");
    }

    #[test]
    fn test_extract_other_field() {
        let body = r#"{"risk_assessment": "High"}"#;
        assert_eq!(extract_analysis(body, "risk_assessment").unwrap(), "High");
    }

    #[test]
    fn test_missing_field() {
        let err = extract_analysis(r#"{"other": "x"}"#, "analysis").unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "analysis"));
        assert_eq!(err.to_string(), "missing field `analysis` in response");
    }

    #[test]
    fn test_non_string_field() {
        let err = extract_analysis(r#"{"analysis": 3}"#, "analysis").unwrap_err();
        assert!(matches!(err, Error::FieldNotString(_)));
    }

    #[test]
    fn test_not_an_object() {
        let err = extract_analysis("[1, 2]", "analysis").unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = extract_analysis("{not json", "analysis").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
