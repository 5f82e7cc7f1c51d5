//! Ferrous mDNS Domain Layer
pub mod config;
pub mod errors;
pub mod host;
pub mod interface;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use host::{HostBinding, RegisteredHost};
pub use interface::{InterfaceId, NetworkInterface};
pub use resolution::{BindingAnswer, Resolution};
