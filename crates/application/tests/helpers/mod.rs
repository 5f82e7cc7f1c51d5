pub mod mock_interfaces;

pub use mock_interfaces::*;
