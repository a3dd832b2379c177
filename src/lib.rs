#![doc = "The `todo_api` library crate."]
#![doc = ""]
#![doc = "Accounts with bearer-token authentication and per-user to-do items, served"]
#![doc = "over HTTP with actix-web. The binary (`main.rs`) wires configuration, a store"]
#![doc = "and `routes::config` into an `HttpServer`."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use crate::error::AppError;
