//! Error types for canteen-core
//!
//! Every failure the domain can report is a parse of an unknown identifier or
//! a rejected form. Each variant maps to a stable code and to the message key
//! used to show it to the user.

use thiserror::Error;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Locale code not among the supported languages
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Theme name other than light/dark
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Role code other than student/staff
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Order status word outside the status vocabulary
    #[error("unknown order status: {0}")]
    UnknownStatus(String),

    /// Meal period other than breakfast/lunch/dinner
    #[error("unknown meal period: {0}")]
    UnknownMealPeriod(String),

    /// Revenue period other than month/year
    #[error("unknown revenue period: {0}")]
    UnknownPeriod(String),

    /// No product fixture with this identifier
    #[error("product not found: {0}")]
    UnknownProduct(String),

    /// No category fixture with this identifier
    #[error("category not found: {0}")]
    UnknownCategory(String),

    /// Form submission rejected
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Get a stable error code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownLocale(_) => "unknown_locale",
            Self::UnknownTheme(_) => "unknown_theme",
            Self::UnknownRole(_) => "unknown_role",
            Self::UnknownStatus(_) => "unknown_status",
            Self::UnknownMealPeriod(_) => "unknown_meal_period",
            Self::UnknownPeriod(_) => "unknown_period",
            Self::UnknownProduct(_) => "unknown_product",
            Self::UnknownCategory(_) => "unknown_category",
            Self::Validation(_) => "validation_failed",
        }
    }

    /// Message key used to display the error in the active locale
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.message_key(),
            _ => "notFound",
        }
    }
}

/// A form was submitted with required fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login form without username or password
    #[error("all fields are required")]
    MissingCredentials,

    /// Product form without English name, price or category
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Suggest-time dialog confirmed without a slot
    #[error("no time slot selected")]
    MissingTimeSlot,
}

impl ValidationError {
    /// Message key of the inline message shown next to the form
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "fillAllFields",
            Self::MissingFields(_) => "fillRequiredFields",
            Self::MissingTimeSlot => "selectTimeSlot",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::UnknownLocale("de".into()).code(), "unknown_locale");
        assert_eq!(
            Error::Validation(ValidationError::MissingTimeSlot).code(),
            "validation_failed"
        );
    }

    #[test]
    fn test_validation_message_keys() {
        assert_eq!(
            ValidationError::MissingCredentials.message_key(),
            "fillAllFields"
        );
        let err: Error = ValidationError::MissingFields(vec!["price"]).into();
        assert_eq!(err.message_key(), "fillRequiredFields");
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::MissingFields(vec!["name_en", "price"]);
        assert_eq!(
            err.to_string(),
            "missing required fields: name_en, price"
        );
        assert!(Error::UnknownProduct("99".into())
            .to_string()
            .contains("product not found"));
    }
}
