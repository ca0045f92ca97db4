//! Front end for the risk screens: configuration, rendering and the
//! interactive session used by the `screen` binary.

pub mod config;
pub mod render;
pub mod session;

pub use config::{discover, ConfigError, ConfigSource, OutputFormat, ScreenConfig};
pub use session::ScreenSession;
