//! Business rules for accounts and to-dos, independent of HTTP.

pub mod auth;
pub mod todos;
