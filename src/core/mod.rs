//! Core domain types, configuration, and aggregation logic

pub mod config;
pub mod insights;
pub mod models;
