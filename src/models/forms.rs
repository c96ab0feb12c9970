//! Form state and required-field validation
//!
//! Validation failures are reported before any request is built, so a
//! form that fails here never reaches the network.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use super::fleet::Location;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            FormError::Required(field) => field,
            FormError::Invalid { field, .. } => field,
        }
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), FormError> {
    require(field, value)?;
    if email_pattern().is_match(value.trim()) {
        Ok(())
    } else {
        Err(FormError::Invalid {
            field,
            reason: "is not a valid e-mail address".to_string(),
        })
    }
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Create/edit dialog state of the locations page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationForm {
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub working_hours: String,
    pub is_pickup: bool,
    pub is_dropoff: bool,
    pub is_active: bool,
}

impl Default for LocationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            city: String::new(),
            address: String::new(),
            phone: String::new(),
            working_hours: String::new(),
            is_pickup: true,
            is_dropoff: true,
            is_active: true,
        }
    }
}

impl LocationForm {
    /// Prefill the dialog from an existing location
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            city: location.city.clone(),
            address: location.address.clone().unwrap_or_default(),
            phone: location.phone.clone().unwrap_or_default(),
            working_hours: location.working_hours.clone().unwrap_or_default(),
            is_pickup: location.is_pickup,
            is_dropoff: location.is_dropoff,
            is_active: location.is_active,
        }
    }

    /// Name and city are mandatory
    pub fn validate(&self) -> Result<(), FormError> {
        require("name", &self.name)?;
        require("city", &self.city)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_form_requires_name_and_city() {
        let mut form = LocationForm::default();
        assert_eq!(form.validate(), Err(FormError::Required("name")));

        form.name = "Airport office".into();
        form.city = "   ".into();
        assert_eq!(form.validate(), Err(FormError::Required("city")));

        form.city = "Bitlis".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("info@fleetease.com"));
        assert!(!is_valid_email("info@fleetease"));
        assert!(!is_valid_email("not an email"));
        assert_eq!(
            require_email("email", "").unwrap_err(),
            FormError::Required("email")
        );
    }
}
