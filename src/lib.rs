pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod store;
