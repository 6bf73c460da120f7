//! Domain layer for the add-on settings
//!
//! This module contains the settings record, the add-on manifest and the
//! port through which environment variables are read.

pub mod models;
pub mod ports;
