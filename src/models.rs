//! Request and response shapes for the HTTP API.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ApiError;

/// One prediction request, parsed and validated from the submitted form.
#[derive(Debug, Clone, PartialEq)]
pub struct CarFeatures {
    pub carlength: f64,
    pub carwidth: f64,
    pub carheight: f64,
    pub enginesize: f64,
    pub horsepower: f64,
    pub peakrpm: f64,
}

impl CarFeatures {
    /// Parses the six named fields out of a form submission. Fails on the
    /// first field that is missing or not a number.
    pub fn parse(form: &HashMap<String, String>) -> Result<Self, ApiError> {
        Ok(Self {
            carlength: parse_field(form, "carlength")?,
            carwidth: parse_field(form, "carwidth")?,
            carheight: parse_field(form, "carheight")?,
            enginesize: parse_field(form, "enginesize")?,
            horsepower: parse_field(form, "horsepower")?,
            peakrpm: parse_field(form, "peakrpm")?,
        })
    }

    /// Feature vector in the order the model was trained on.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.carlength,
            self.carwidth,
            self.carheight,
            self.enginesize,
            self.horsepower,
            self.peakrpm,
        ]
    }
}

fn parse_field(form: &HashMap<String, String>, name: &'static str) -> Result<f64, ApiError> {
    let raw = form.get(name).ok_or(ApiError::MissingField(name))?;
    raw.trim().parse().map_err(|_| ApiError::InvalidNumber {
        field: name,
        value: raw.clone(),
    })
}

/// JSON envelope used by the health, model-info and fallback endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> HashMap<String, String> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const FULL_FORM: [(&str, &str); 6] = [
        ("carlength", "170"),
        ("carwidth", "65"),
        ("carheight", "55"),
        ("enginesize", "130"),
        ("horsepower", "110"),
        ("peakrpm", "5500"),
    ];

    #[test]
    fn parse_builds_the_typed_request() {
        let features = CarFeatures::parse(&form(&FULL_FORM)).unwrap();
        assert_eq!(
            features,
            CarFeatures {
                carlength: 170.0,
                carwidth: 65.0,
                carheight: 55.0,
                enginesize: 130.0,
                horsepower: 110.0,
                peakrpm: 5500.0,
            }
        );
    }

    #[test]
    fn to_array_keeps_the_trained_order() {
        let features = CarFeatures::parse(&form(&FULL_FORM)).unwrap();
        assert_eq!(
            features.to_array(),
            [170.0, 65.0, 55.0, 130.0, 110.0, 5500.0]
        );
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let mut fields = form(&FULL_FORM);
        fields.insert("carlength".to_string(), " 170.5 ".to_string());
        let features = CarFeatures::parse(&fields).unwrap();
        assert_eq!(features.carlength, 170.5);
    }

    #[test]
    fn parse_fails_on_missing_field() {
        let mut fields = form(&FULL_FORM);
        fields.remove("horsepower");
        let err = CarFeatures::parse(&fields).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("horsepower")));
    }

    #[test]
    fn parse_fails_on_non_numeric_value() {
        let mut fields = form(&FULL_FORM);
        fields.insert("carwidth".to_string(), "abc".to_string());
        let err = CarFeatures::parse(&fields).unwrap_err();
        match err {
            ApiError::InvalidNumber { field, value } => {
                assert_eq!(field, "carwidth");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn envelope_reports_success_and_error() {
        let ok = ApiResponse::success(42);
        assert!(ok.success);
        assert_eq!(ok.data, Some(42));
        assert!(ok.error.is_none());

        let err = ApiResponse::<i32>::error("boom");
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
