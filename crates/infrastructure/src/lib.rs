//! Ferrous mDNS Infrastructure Layer
pub mod system;
