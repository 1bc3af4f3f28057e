//! Host-side glue for the combobox core: a stateful controller, configuration
//! loading, logger setup and replay of recorded action logs.
mod config;
mod controller;
pub mod logging;
mod replay;

pub use config::{to_boolean, truthy, ComboConfig, ConfigError};
pub use controller::Combobox;
pub use logging::{LogDestination, LogScope, LogSettings, LoggingError};
pub use replay::{parse_action, replay, ActionRecord, ReplayError};
