//! Account provisioning shared by the super-admin and admin dashboards.

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;
