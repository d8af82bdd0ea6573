//! External service interop

pub mod appkit;
