use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::{Role, SubRole};

/// Read-only profile card for the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub display_name: String,
    pub email: String,
    pub role_label: String,
}

impl ProfileInfo {
    pub fn for_context(role: Role, sub_role: Option<SubRole>) -> Self {
        match (role, sub_role) {
            (Role::Vics, _) => Self {
                display_name: "VICS Administrator".to_string(),
                email: "admin@vics.example".to_string(),
                role_label: "Administrator".to_string(),
            },
            (Role::LawMis, Some(SubRole::Admin)) => Self {
                display_name: "LAW-MIS Administrator".to_string(),
                email: "admin@lawmis.example".to_string(),
                role_label: "ADMIN".to_string(),
            },
            (Role::LawMis, Some(SubRole::Vendor)) => Self {
                display_name: "Marketplace Vendor".to_string(),
                email: "vendor@lawmis.example".to_string(),
                role_label: "VENDOR".to_string(),
            },
            (Role::LawMis, _) => Self {
                display_name: "Workshop Applicant".to_string(),
                email: "user@lawmis.example".to_string(),
                role_label: "USER".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangePasswordError {
    #[error("All fields are required")]
    MissingField,
    #[error("New password must be at least {0} characters")]
    TooShort(usize),
    #[error("New password and confirmation do not match")]
    Mismatch,
    #[error("New password must differ from the current one")]
    Unchanged,
}

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl ChangePasswordForm {
    /// Validation only; nothing is stored.
    pub fn validate(&self) -> Result<(), ChangePasswordError> {
        if self.current.is_empty() || self.new_password.is_empty() || self.confirm.is_empty() {
            return Err(ChangePasswordError::MissingField);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ChangePasswordError::TooShort(MIN_PASSWORD_LEN));
        }
        if self.new_password != self.confirm {
            return Err(ChangePasswordError::Mismatch);
        }
        if self.new_password == self.current {
            return Err(ChangePasswordError::Unchanged);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(current: &str, new_password: &str, confirm: &str) -> ChangePasswordForm {
        ChangePasswordForm {
            current: current.into(),
            new_password: new_password.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn test_valid_change() {
        assert_eq!(form("admin", "s3cret!", "s3cret!").validate(), Ok(()));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            form("", "s3cret!", "s3cret!").validate(),
            Err(ChangePasswordError::MissingField)
        );
        assert_eq!(
            form("admin", "abc", "abc").validate(),
            Err(ChangePasswordError::TooShort(MIN_PASSWORD_LEN))
        );
        assert_eq!(
            form("admin", "s3cret!", "s3cret?").validate(),
            Err(ChangePasswordError::Mismatch)
        );
        assert_eq!(
            form("s3cret!", "s3cret!", "s3cret!").validate(),
            Err(ChangePasswordError::Unchanged)
        );
    }

    #[test]
    fn test_profile_follows_sub_role() {
        let p = ProfileInfo::for_context(Role::LawMis, Some(SubRole::Vendor));
        assert_eq!(p.role_label, "VENDOR");
        let p = ProfileInfo::for_context(Role::Vics, None);
        assert_eq!(p.role_label, "Administrator");
    }
}
