//! Application state contexts

pub mod connection;
pub mod toast;
