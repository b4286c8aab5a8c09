//! Hidden form field detection for templates.
//!
//! Form support is the optional `forms` feature. Whether it is available is
//! decided once when the filter is built; a filter without form support
//! fails every call with [`Error::MissingOptionalDependency`].

use crate::error::{Error, Result};

/// Name of the optional dependency reported when form support is missing.
pub const FORMS_DEPENDENCY: &str = "forms";

/// HTML input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Hidden,
    Text,
    Password,
    Email,
    Checkbox,
    Submit,
    Other,
}

/// A form field as seen by templates.
pub trait FormField {
    fn name(&self) -> &str;
    fn input_type(&self) -> InputType;
}

/// Template helper deciding whether a field should render as hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenFieldFilter {
    forms_available: bool,
}

impl HiddenFieldFilter {
    /// Detect form support from the compiled feature set.
    pub fn detect() -> Self {
        Self::new(cfg!(feature = "forms"))
    }

    pub fn new(forms_available: bool) -> Self {
        Self { forms_available }
    }

    /// A filter without form support.
    pub fn unavailable() -> Self {
        Self::new(false)
    }

    pub fn is_available(&self) -> bool {
        self.forms_available
    }

    pub fn is_hidden_field(&self, field: &dyn FormField) -> Result<bool> {
        if !self.forms_available {
            return Err(Error::MissingOptionalDependency {
                dependency: FORMS_DEPENDENCY,
            });
        }
        Ok(field.input_type() == InputType::Hidden)
    }
}

impl Default for HiddenFieldFilter {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(feature = "forms")]
pub use fields::Field;

#[cfg(feature = "forms")]
mod fields {
    use super::{FormField, InputType};

    /// A simple form field.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Field {
        pub name: String,
        pub label: String,
        pub input_type: InputType,
        pub value: Option<String>,
    }

    impl Field {
        pub fn new(name: impl Into<String>, label: impl Into<String>, input_type: InputType) -> Self {
            Self {
                name: name.into(),
                label: label.into(),
                input_type,
                value: None,
            }
        }

        pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
            let name = name.into();
            Self {
                label: name.clone(),
                name,
                input_type: InputType::Hidden,
                value: Some(value.into()),
            }
        }

        pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
            Self::new(name, label, InputType::Text)
        }

        pub fn with_value(mut self, value: impl Into<String>) -> Self {
            self.value = Some(value.into());
            self
        }
    }

    impl FormField for Field {
        fn name(&self) -> &str {
            &self.name
        }

        fn input_type(&self) -> InputType {
            self.input_type
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain(InputType);

    impl FormField for Plain {
        fn name(&self) -> &str {
            "plain"
        }

        fn input_type(&self) -> InputType {
            self.0
        }
    }

    #[test]
    fn test_unavailable_reports_missing_dependency() {
        let filter = HiddenFieldFilter::unavailable();
        let err = filter.is_hidden_field(&Plain(InputType::Hidden)).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingOptionalDependency {
                dependency: FORMS_DEPENDENCY
            }
        ));
    }

    #[test]
    fn test_available_checks_input_type() {
        let filter = HiddenFieldFilter::new(true);
        assert!(filter.is_hidden_field(&Plain(InputType::Hidden)).unwrap());
        assert!(!filter.is_hidden_field(&Plain(InputType::Text)).unwrap());
        assert!(!filter.is_hidden_field(&Plain(InputType::Password)).unwrap());
    }

    #[test]
    fn test_detect_follows_feature() {
        assert_eq!(
            HiddenFieldFilter::detect().is_available(),
            cfg!(feature = "forms")
        );
    }

    #[cfg(feature = "forms")]
    #[test]
    fn test_field_constructors() {
        let filter = HiddenFieldFilter::detect();
        let csrf = Field::hidden("csrf_token", "abc123");
        assert_eq!(csrf.value.as_deref(), Some("abc123"));
        assert!(filter.is_hidden_field(&csrf).unwrap());

        let email = Field::new("email", "Email", InputType::Email).with_value("a@example.com");
        assert!(!filter.is_hidden_field(&email).unwrap());
        assert_eq!(email.name(), "email");
    }
}
