use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list_query::Searchable;

/// Portal operator account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub is_active: bool,
    pub joined_on: NaiveDate,
}

impl UserAccount {
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }
}

impl Searchable for UserAccount {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ]
    }
}

/// Flip `is_active` of the record with `id` in a local copy.
pub fn toggle_user_active(users: &mut [UserAccount], id: &str) -> bool {
    match users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.toggle_active();
            true
        }
        None => false,
    }
}
