//! Utilities shared by the Fuda binaries.

pub mod logger;
