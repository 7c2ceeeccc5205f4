mod topology;
mod address;
mod network;
pub mod reference;

pub use topology::{Device, Link, Network, NodeIndex, Role};
pub use address::AddressBook;
pub use network::{DeviceListing, Topology};

pub type Path = Vec<NodeIndex>;
