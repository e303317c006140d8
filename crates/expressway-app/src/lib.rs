//! Application service layer - config, built-in corridor, route use cases

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
