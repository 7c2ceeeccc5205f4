use hashbrown::HashMap;
use super::topology::{Network, NodeIndex};
use crate::utils::error::LoadError;

/// Address table. Each address names exactly one device, while a device may
/// own any number of addresses.
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    bindings: HashMap<String, NodeIndex>,
    owned: HashMap<NodeIndex, Vec<String>>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
    pub fn bind(&mut self, network: &Network, address: &str, node: NodeIndex)
        -> Result<(), LoadError> {
        match self.bindings.get(address) {
            Some(&bound) if bound == node => Ok(()),
            Some(&bound) => Err(LoadError::DuplicateAddress {
                address: address.to_owned(),
                bound: network.name(bound).to_owned(),
                requested: network.name(node).to_owned(),
            }),
            None => {
                self.bindings.insert(address.to_owned(), node);
                self.owned.entry(node).or_default().push(address.to_owned());
                Ok(())
            }
        }
    }
    pub fn get(&self, address: &str) -> Option<NodeIndex> {
        self.bindings.get(address).copied()
    }
    /// Addresses of a device, in the order they were bound.
    pub fn addresses_of(&self, node: NodeIndex) -> &[String] {
        self.owned.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Accepts either an address or a device name. Surrounding whitespace is
    /// ignored, and addresses take precedence over names.
    pub fn resolve(&self, network: &Network, token: &str) -> Option<NodeIndex> {
        let token = token.trim();
        self.get(token).or_else(|| network.lookup(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn sample() -> (Network, AddressBook) {
        let mut network = Network::default();
        network.add_links(&[("e1", "h1", 4), ("h1", "e1", 4)]);
        let mut book = AddressBook::new();
        let e1 = network.lookup("e1").unwrap();
        let h1 = network.lookup("h1").unwrap();
        book.bind(&network, "192.168.10.210", e1).unwrap();
        book.bind(&network, "192.168.10.1", e1).unwrap();
        book.bind(&network, "192.168.10.2", h1).unwrap();
        (network, book)
    }
    #[test]
    fn it_resolves_either_form() {
        let (network, book) = sample();
        let h1 = network.lookup("h1");
        assert_eq!(book.resolve(&network, "192.168.10.2"), h1);
        assert_eq!(book.resolve(&network, "h1"), h1);
        assert_eq!(book.resolve(&network, "  192.168.10.2\n"), h1);
        assert_eq!(book.resolve(&network, "10.0.0.1"), None);
        assert_eq!(book.resolve(&network, ""), None);
    }
    #[test]
    fn it_groups_addresses_by_device() {
        let (network, book) = sample();
        let e1 = network.lookup("e1").unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.addresses_of(e1), ["192.168.10.210", "192.168.10.1"]);
    }
    #[test]
    fn it_rejects_rebinding_address() {
        let (network, mut book) = sample();
        let e1 = network.lookup("e1").unwrap();
        let h1 = network.lookup("h1").unwrap();
        assert!(book.bind(&network, "192.168.10.2", h1).is_ok());
        match book.bind(&network, "192.168.10.2", e1) {
            Err(LoadError::DuplicateAddress { bound, requested, .. }) => {
                assert_eq!(bound, "h1");
                assert_eq!(requested, "e1");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(book.addresses_of(h1), ["192.168.10.2"]);
    }
}
