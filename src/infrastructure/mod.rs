//! Infrastructure layer module
//!
//! This module contains the adapters around the settings domain:
//! - Configuration layering and validation
//! - Logging infrastructure

pub mod config;
pub mod logging;
