//! Built-in three-tier topology: one core router, two aggregation routers,
//! four edge routers and eight hosts on 192.168.10.0/24.

use super::topology::Role;
use super::Topology;
use crate::utils::error::LoadError;

const DEVICES: &[(&str, Role, &[&str])] = &[
    ("c1", Role::Core, &["192.168.10.201", "192.168.10.205"]),
    ("a1", Role::Aggregation, &["192.168.10.202", "192.168.10.209", "192.168.10.213"]),
    ("a2", Role::Aggregation, &["192.168.10.206", "192.168.10.217", "192.168.10.221"]),
    ("e1", Role::Edge, &["192.168.10.210", "192.168.10.1"]),
    ("e2", Role::Edge, &["192.168.10.214", "192.168.10.17"]),
    ("e3", Role::Edge, &["192.168.10.218", "192.168.10.65"]),
    ("e4", Role::Edge, &["192.168.10.222", "192.168.10.97"]),
    ("h1", Role::Host, &["192.168.10.2"]),
    ("h2", Role::Host, &["192.168.10.3"]),
    ("h3", Role::Host, &["192.168.10.18"]),
    ("h4", Role::Host, &["192.168.10.19"]),
    ("h5", Role::Host, &["192.168.10.66"]),
    ("h6", Role::Host, &["192.168.10.67"]),
    ("h7", Role::Host, &["192.168.10.98"]),
    ("h8", Role::Host, &["192.168.10.99"]),
];

const LINKS: &[(&str, &str, u32)] = &[
    ("c1", "a1", 1), ("c1", "a2", 1),
    ("a1", "c1", 1), ("a1", "e1", 2), ("a1", "e2", 2),
    ("a2", "c1", 1), ("a2", "e3", 2), ("a2", "e4", 2),
    ("e1", "a1", 2), ("e1", "h1", 4), ("e1", "h2", 4),
    ("e2", "a1", 2), ("e2", "h3", 4), ("e2", "h4", 4),
    ("e3", "a2", 2), ("e3", "h5", 4), ("e3", "h6", 4),
    ("e4", "a2", 2), ("e4", "h7", 4), ("e4", "h8", 4),
    // hosts only link back to their edge router
    ("h1", "e1", 4), ("h2", "e1", 4),
    ("h3", "e2", 4), ("h4", "e2", 4),
    ("h5", "e3", 4), ("h6", "e3", 4),
    ("h7", "e4", 4), ("h8", "e4", 4),
];

pub fn three_tier() -> Result<Topology, LoadError> {
    let mut topology = Topology::new();
    for &(name, role, addresses) in DEVICES {
        topology.add_device(name, Some(role), addresses)?;
    }
    topology.network.add_links(LINKS);
    Ok(topology)
}
