//! Field-level constraint checks applied to request payloads before dispatch.
//!
//! Constraints mirror the ones the remote API enforces. Every failing field is
//! collected, so a single [`ValidationError`] reports all of them at once.

use std::fmt;

use url::Url;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The wire name of the offending field.
    pub field: String,
    /// A human readable description of the broken constraint.
    pub message: String,
}

/// One or more payload fields failed their declared constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates an error carrying a single field failure.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Returns `true` if `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The names of all failing fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Implemented by every payload the dispatcher accepts.
pub trait Validate {
    /// Checks the declared constraints of `self`.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Ad-hoc JSON objects carry no declared constraints.
impl Validate for serde_json::Map<String, serde_json::Value> {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Accumulates field failures for one payload.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub(crate) fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
    }

    pub(crate) fn range<T>(&mut self, field: &str, value: Option<T>, min: T, max: T)
    where
        T: PartialOrd + fmt::Debug + Copy,
    {
        if let Some(v) = value {
            if v < min || v > max {
                self.fail(field, format!("must be between {:?} and {:?}, got {:?}", min, max, v));
            }
        }
    }

    pub(crate) fn min<T>(&mut self, field: &str, value: Option<T>, min: T)
    where
        T: PartialOrd + fmt::Debug + Copy,
    {
        if let Some(v) = value {
            if v < min {
                self.fail(field, format!("must be at least {:?}, got {:?}", min, v));
            }
        }
    }

    pub(crate) fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &[&str]) {
        if let Some(v) = value {
            if !allowed.contains(&v) {
                self.fail(
                    field,
                    format!("must be one of [{}], got {:?}", allowed.join(" "), v),
                );
            }
        }
    }

    pub(crate) fn url(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !is_url(v) {
                self.fail(field, format!("must be a valid URL, got {:?}", v));
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

pub(crate) fn is_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host() && !url.cannot_be_a_base(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_failing_field() {
        let mut v = Validator::new();
        v.required("prompt", "  ");
        v.range("width", Some(32u32), 64, 2048);
        v.range("height", Some(512u32), 64, 2048);
        v.one_of("output_format", Some("ogg"), &["wav", "mp3"]);
        v.url("webhook", Some("not a url"));

        let err = v.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["prompt", "width", "output_format", "webhook"]);
        assert!(!err.has_field("height"));
    }

    #[test]
    fn unset_optionals_pass() {
        let mut v = Validator::new();
        v.range::<f64>("speed", None, 0.1, 10.0);
        v.min::<u32>("chunk_size", None, 1);
        v.one_of("bitrate", None, &["128k"]);
        v.url("webhook", None);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut v = Validator::new();
        v.range("speed", Some(0.1), 0.1, 10.0);
        v.range("speed", Some(10.0), 0.1, 10.0);
        v.min("max_new_token", Some(1), 1);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn url_check_rejects_schemeless_values() {
        assert!(is_url("https://example.com/hook"));
        assert!(!is_url("example.com/hook"));
        assert!(!is_url("mailto:someone@example.com"));
    }

    #[test]
    fn display_lists_fields() {
        let err = ValidationError::field("id", "is required");
        assert_eq!(err.to_string(), "validation error: id is required");
    }
}
