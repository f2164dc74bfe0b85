//! HTTP 中间件

pub mod auth;

pub use auth::{StudentId, auth_middleware};
