//! Command implementations for HJH CLI

pub mod place;
pub mod config;
