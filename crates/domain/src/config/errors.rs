use crate::interface::InterfaceId;

/// Fatal configuration errors, surfaced at startup.
///
/// A configuration that fails any of these never exists as a value; the
/// caller must not proceed with a partially valid instance.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Query interval must be a positive duration")]
    NonPositiveInterval,

    #[error("Registered host with an empty name")]
    EmptyHostName,

    #[error("Duplicate registered host name: {0}")]
    DuplicateHostName(String),

    #[error("Host {host}: more than one binding for interface {interface}")]
    DuplicateBinding { host: String, interface: InterfaceId },

    #[error("Host {0}: more than one fallback binding")]
    DuplicateFallback(String),
}
