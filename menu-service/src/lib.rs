//! Digital menu backend: three JSON routes over a single configuration
//! document (the restaurant menu plus the store open/closed flag).
pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;
