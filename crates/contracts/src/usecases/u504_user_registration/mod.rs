//! LAW-MIS user self-registration. Nothing is stored; a valid form just
//! sends the applicant back to the login screen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::system::profile::MIN_PASSWORD_LEN;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        for (label, value) in [
            ("Full name", &self.full_name),
            ("Email", &self.email),
            ("Username", &self.username),
            ("Password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(label));
            }
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err(RegistrationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegistrationForm {
        RegistrationForm {
            full_name: "Nikhil Verma".into(),
            email: "nikhil@example.in".into(),
            phone: String::new(),
            username: "nikhil".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_errors_in_order() {
        let mut f = valid();
        f.username.clear();
        assert_eq!(f.validate(), Err(RegistrationError::MissingField("Username")));

        let mut f = valid();
        f.email = "nikhil.example.in".into();
        assert_eq!(f.validate(), Err(RegistrationError::InvalidEmail));

        let mut f = valid();
        f.confirm_password = "secret2".into();
        assert_eq!(f.validate(), Err(RegistrationError::PasswordMismatch));
    }
}
