pub mod startup;

pub use startup::{run, Startup, StartupError};
