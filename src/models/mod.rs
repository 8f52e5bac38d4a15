//! Diesel row types and configuration models loaded from external sources.

pub mod account;
pub mod config;
pub mod saved_school;
pub mod university;
