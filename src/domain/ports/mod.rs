//! Port trait definitions (Hexagonal Architecture)
//!
//! - `EnvSource`: where configuration variables are read from

pub mod env_source;

pub use env_source::{EnvSource, ProcessEnv};
