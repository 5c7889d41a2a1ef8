//! Bridge from `validator` derive results to [`CoreError`].

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
///
/// All field failures are folded into one [`CoreError::Validation`] message,
/// sorted by field name so the text is stable.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Custom rule for text that must contain something besides whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let reason = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(url)]
        website: Option<String>,
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(not_blank("Acme").is_ok());
        assert!(not_blank("").is_err());
        let err = not_blank(" \t ").unwrap_err();
        assert_eq!(err.code, "blank");
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            name: "Acme".into(),
            website: Some("https://acme.test".into()),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn failures_are_joined_by_field() {
        let input = Sample {
            name: String::new(),
            website: Some("not a url".into()),
        };
        let err = validate_input(&input).unwrap_err();
        match err {
            CoreError::Validation(msg) => {
                assert_eq!(msg, "name: must not be empty; website: url");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
