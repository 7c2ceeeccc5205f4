use hashbrown::HashMap;
use serde::Deserialize;
use std::fmt;

/// Handle to a device, only handed out by the `Network` that owns it.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

/// Tier of a device in the hierarchy, tagged explicitly at load time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Core,
    Aggregation,
    Edge,
    Host,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Core => "core",
            Role::Aggregation => "aggregation",
            Role::Edge => "edge",
            Role::Host => "host",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct Device {
    pub name: String,
    pub role: Option<Role>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub to: NodeIndex,
    pub weight: u32,
}

#[derive(Clone, Debug)]
pub struct Node {
    device: Device,
    links: Vec<Link>,
}

impl Node {
    pub fn new(device: Device) -> Self {
        Self { device, links: vec![] }
    }
}

/// Directed weighted graph of devices. Links are stored one way only; a
/// back-link exists only when it was added explicitly.
#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    names: HashMap<String, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn link_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum()
    }
    pub fn nodes(&self) -> impl Iterator<Item=NodeIndex> + Clone {
        (0..self.nodes.len()).map(NodeIndex::new)
    }
    pub fn contains(&self, node: NodeIndex) -> bool {
        node.index() < self.nodes.len()
    }
    pub fn get_device(&self, node: NodeIndex) -> Option<&Device> {
        self.nodes.get(node.index()).map(|n| &n.device)
    }
    pub fn device(&self, node: NodeIndex) -> &Device {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()].device
    }
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.device(node).name
    }
    pub fn lookup(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).copied()
    }
    pub fn neighbors(&self, node: NodeIndex)
        -> impl Iterator<Item=(NodeIndex, u32)> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].links.iter()
            .map(|link| (link.to, link.weight))
    }
    /// Registers a device, or returns the existing index. A role given here
    /// fills in a device that was first seen without one.
    pub fn add_device(&mut self, name: &str, role: Option<Role>) -> NodeIndex {
        if let Some(node) = self.lookup(name) {
            let device = &mut self.nodes[node.index()].device;
            if device.role.is_none() {
                device.role = role;
            }
            return node;
        }
        let node = NodeIndex::new(self.nodes.len());
        let device = Device { name: name.to_owned(), role };
        self.nodes.push(Node::new(device));
        self.names.insert(name.to_owned(), node);
        node
    }
    /// Adds the one-way link `from -> to`, registering unknown endpoints.
    /// A second link between the same pair replaces the first weight.
    pub fn add_link(&mut self, from: &str, to: &str, weight: u32) {
        let from = self.add_device(from, None);
        let to = self.add_device(to, None);
        let links = &mut self.nodes[from.index()].links;
        match links.iter_mut().find(|link| link.to == to) {
            Some(link) => link.weight = weight,
            None => links.push(Link { to, weight }),
        }
    }
    pub fn add_links(&mut self, links: &[(&str, &str, u32)]) {
        for &(from, to, weight) in links {
            self.add_link(from, to, weight);
        }
    }
    pub fn weight(&self, from: NodeIndex, to: NodeIndex) -> Option<u32> {
        self.neighbors(from)
            .find(|&(node, _)| node == to)
            .map(|(_, weight)| weight)
    }
    pub fn cost_along(&self, path: &[NodeIndex]) -> Option<u64> {
        path.windows(2)
            .map(|ends| self.weight(ends[0], ends[1]).map(u64::from))
            .sum()
    }
    pub fn node_sequence(&self, path: &[NodeIndex]) -> Vec<&str> {
        path.iter().map(|&node| self.name(node)).collect()
    }
}
