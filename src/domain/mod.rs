//! Domain layer for the userdeck plugin.
//!
//! Core types that do not depend on Zellij APIs: the user record as delivered
//! by the directory service, and the crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record model and display formatting

pub mod error;
pub mod user;

pub use error::{Result, UserdeckError};
pub use user::{Location, Name, Picture, UserRecord};
