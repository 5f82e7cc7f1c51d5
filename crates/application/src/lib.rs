//! Ferrous mDNS Application Layer
pub mod ports;
pub mod services;
pub mod use_cases;

pub use services::ConfigHandle;
pub use use_cases::ResolveBindingUseCase;
