pub mod config;
pub mod csrf;
