use itertools::Itertools;
use super::address::AddressBook;
use super::topology::{Network, NodeIndex, Role};
use crate::utils::error::LoadError;

/// One row of the device listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceListing {
    pub name: String,
    pub role: Option<Role>,
    pub addresses: Vec<String>,
}

/// The graph together with its address table. Built once by a loader and
/// only read afterwards.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    pub network: Network,
    pub addresses: AddressBook,
}

impl Topology {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn add_device(&mut self, name: &str, role: Option<Role>, addresses: &[&str])
        -> Result<NodeIndex, LoadError> {
        let node = self.network.add_device(name, role);
        for address in addresses {
            self.addresses.bind(&self.network, address, node)?;
        }
        Ok(node)
    }
    pub fn add_link(&mut self, from: &str, to: &str, weight: u32) {
        self.network.add_link(from, to, weight);
    }
    pub fn device_count(&self) -> usize {
        self.network.node_count()
    }
    pub fn count_role(&self, role: Role) -> usize {
        self.network.nodes()
            .filter(|&node| self.network.device(node).role == Some(role))
            .count()
    }
    pub fn resolve(&self, token: &str) -> Option<NodeIndex> {
        self.addresses.resolve(&self.network, token)
    }
    /// Every device with its addresses, sorted by device name.
    pub fn listing(&self) -> Vec<DeviceListing> {
        self.network.nodes()
            .map(|node| self.describe(node))
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }
    /// Same rows grouped by role, tiers top-down and untagged devices last.
    pub fn listing_by_role(&self) -> Vec<(Option<Role>, Vec<DeviceListing>)> {
        let rows = self.listing().into_iter()
            .sorted_by_key(|row| (row.role.is_none(), row.role));
        let mut groups = vec![];
        for (role, group) in &rows.group_by(|row| row.role) {
            groups.push((role, group.collect()));
        }
        groups
    }
    fn describe(&self, node: NodeIndex) -> DeviceListing {
        let device = self.network.device(node);
        DeviceListing {
            name: device.name.clone(),
            role: device.role,
            addresses: self.addresses.addresses_of(node).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn sample() -> Topology {
        let mut topology = Topology::new();
        topology.add_device("e1", Some(Role::Edge), &["10.0.0.254"]).unwrap();
        topology.add_device("h2", Some(Role::Host), &["10.0.0.3"]).unwrap();
        topology.add_device("h1", Some(Role::Host), &["10.0.0.2", "10.0.1.2"]).unwrap();
        topology.add_link("h1", "e1", 4);
        topology.add_link("e1", "x9", 1);
        topology
    }
    #[test]
    fn it_lists_devices_by_name() {
        let names: Vec<_> = sample().listing().into_iter()
            .map(|row| row.name)
            .collect();
        assert_eq!(names, vec!["e1", "h1", "h2", "x9"]);
        let h1 = &sample().listing()[1];
        assert_eq!(h1.addresses, vec!["10.0.0.2", "10.0.1.2"]);
    }
    #[test]
    fn it_groups_listing_by_role() {
        let groups = sample().listing_by_role();
        let roles: Vec<_> = groups.iter().map(|(role, _)| *role).collect();
        assert_eq!(roles, vec![Some(Role::Edge), Some(Role::Host), None]);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[2].1[0].name, "x9");
        assert!(groups[2].1[0].addresses.is_empty());
    }
    #[test]
    fn it_resolves_link_only_devices() {
        let topology = sample();
        assert_eq!(topology.resolve("x9"), topology.network.lookup("x9"));
        assert_eq!(topology.resolve("10.0.1.2"), topology.network.lookup("h1"));
        assert_eq!(topology.count_role(Role::Host), 2);
        assert_eq!(topology.device_count(), 4);
    }
    #[test]
    fn it_rejects_duplicate_address() {
        let mut topology = sample();
        let result = topology.add_device("h3", Some(Role::Host), &["10.0.0.2"]);
        assert!(matches!(result, Err(LoadError::DuplicateAddress { .. })));
    }
}
