//! HTTP request handlers, one module per resource.

pub mod client_config;
pub mod geocode;
pub mod measure;
pub mod upload;
pub mod users;
pub mod visualize;
