use thiserror::Error;

/// Failures surfaced by infrastructure ports.
///
/// Never produced by configuration validation or binding resolution; the
/// resolver absorbs enumeration failures and answers with overrides only.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Interface enumeration failed: {0}")]
    InterfaceEnumeration(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
