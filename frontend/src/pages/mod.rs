pub mod accounts;
pub mod add_results;
pub mod admin;
pub mod comparison;
pub mod forgot_password;
pub mod home;
pub mod lecturer;
pub mod lo_detail;
pub mod login;
pub mod modules;
pub mod super_admin;
