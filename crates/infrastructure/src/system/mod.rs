mod interface_provider;

pub use interface_provider::{collect_interfaces, SystemInterfaceProvider};
