//! HTTP API: JSend-wrapped organization routes over an injected store.

pub mod app;
pub mod config;
pub mod middleware;
