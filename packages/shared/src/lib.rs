//! Utilities shared by the Tactoe packages.

pub mod logger;
pub mod time;
