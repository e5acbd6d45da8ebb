use chrono::NaiveDate;

use super::aggregate::UserAccount;

fn user(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    role: &str,
    is_active: bool,
    joined: (i32, u32, u32),
) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role: role.to_string(),
        is_active,
        joined_on: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap_or_default(),
    }
}

/// Sample operators shown in the user management lists.
pub fn sample_users() -> Vec<UserAccount> {
    vec![
        user("U-1001", "Aarav Sharma", "aarav.sharma@vics.example", "+91 98100 11001", "Station Operator", true, (2023, 1, 14)),
        user("U-1002", "Priya Nair", "priya.nair@vics.example", "+91 98100 11002", "Area Manager", true, (2022, 11, 3)),
        user("U-1003", "Rohan Gupta", "rohan.gupta@vics.example", "+91 98100 11003", "Technician", false, (2023, 6, 21)),
        user("U-1004", "Sneha Kulkarni", "sneha.k@vics.example", "+91 98100 11004", "Station Operator", true, (2024, 2, 9)),
        user("U-1005", "Vikram Singh", "vikram.singh@vics.example", "+91 98100 11005", "Administrator", true, (2021, 8, 30)),
        user("U-1006", "Ananya Iyer", "ananya.iyer@vics.example", "+91 98100 11006", "Technician", true, (2024, 5, 17)),
        user("U-1007", "Karan Mehta", "karan.mehta@vics.example", "+91 98100 11007", "Area Manager", false, (2022, 3, 2)),
        user("U-1008", "Divya Reddy", "divya.reddy@vics.example", "+91 98100 11008", "Station Operator", true, (2023, 9, 12)),
        user("U-1009", "Arjun Das", "arjun.das@vics.example", "+91 98100 11009", "Technician", true, (2024, 7, 1)),
        user("U-1010", "Meera Joshi", "meera.joshi@vics.example", "+91 98100 11010", "Support", true, (2023, 12, 5)),
        user("U-1011", "Farhan Qureshi", "farhan.q@vics.example", "+91 98100 11011", "Support", false, (2022, 6, 19)),
        user("U-1012", "Lakshmi Menon", "lakshmi.menon@vics.example", "+91 98100 11012", "Area Manager", true, (2021, 10, 25)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::aggregate::toggle_user_active;
    use crate::shared::list_query::filter_records;

    #[test]
    fn test_search_matches_role_or_name() {
        let users = sample_users();
        assert_eq!(filter_records(&users, "technician").len(), 3);
        assert_eq!(filter_records(&users, "PRIYA").len(), 1);
    }

    #[test]
    fn test_toggle_active_only_touches_local_copy() {
        let mut users = sample_users();
        assert!(toggle_user_active(&mut users, "U-1003"));
        assert!(users.iter().find(|u| u.id == "U-1003").unwrap().is_active);
        assert!(!sample_users().iter().find(|u| u.id == "U-1003").unwrap().is_active);
        assert!(!toggle_user_active(&mut users, "U-0000"));
    }
}
