pub mod change_password;
pub mod login;
pub mod profile;
pub mod register;
pub mod role_select;
pub mod settings;
