//! Configuration and domain payload types.

pub mod config;
pub mod models;
