//! Form validation over plain string values.
//!
//! ```ignore
//! let result = Validator::new()
//!     .field("email", &form.email)
//!     .required("Email is required")
//!     .email("Please enter a valid email")
//!     .validate();
//! ```

use regex::Regex;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Error message for one field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

type Rule = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Field {
    name: String,
    value: String,
    rules: Vec<(Rule, String)>,
}

/// Builder for validating multiple form fields.
///
/// Rules attach to the most recently added field. Only the first failing
/// rule of each field is reported.
#[derive(Default)]
pub struct Validator {
    fields: Vec<Field>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: &str) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.to_string(),
            rules: Vec::new(),
        });
        self
    }

    /// Add a custom rule to the current field.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        match self.fields.last_mut() {
            Some(field) => field.rules.push((Box::new(f), msg.into())),
            None => log::warn!("Validation rule added before any field; ignoring"),
        }
        self
    }

    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    ///
    /// An invalid pattern is logged and fails every value.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        match Regex::new(pattern) {
            Ok(re) => self.rule(move |v| re.is_match(v), msg),
            Err(e) => {
                log::error!("Invalid validation pattern '{}': {}", pattern, e);
                self.rule(|_| false, msg)
            }
        }
    }

    /// Require a valid email address. Empty values pass; combine with `required`.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    pub fn validate(self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .into_iter()
            .filter_map(|field| {
                field
                    .rules
                    .iter()
                    .find(|(rule, _)| !rule(&field.value))
                    .map(|(_, msg)| FieldError {
                        field: field.name.clone(),
                        message: msg.clone(),
                    })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}
