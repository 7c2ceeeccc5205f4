use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::LoadError;
use crate::network::{Role, Topology};

#[derive(Deserialize)]
struct TopologyYaml {
    devices: Vec<DeviceYaml>,
    #[serde(default)]
    links: Vec<LinkYaml>,
}

#[derive(Deserialize)]
struct DeviceYaml {
    name: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    addresses: Vec<String>,
}

#[derive(Deserialize)]
struct LinkYaml {
    from: String,
    to: String,
    weight: u32,
}

pub fn load_topology(path: &str) -> Result<Topology, LoadError> {
    let yaml: TopologyYaml = read_yaml(path)?;
    let mut topology = Topology::new();
    for device in yaml.devices.iter() {
        let addresses: Vec<&str> = device.addresses.iter()
            .map(String::as_str)
            .collect();
        topology.add_device(&device.name, device.role, &addresses)?;
    }
    for link in yaml.links.iter() {
        topology.add_link(&link.from, &link.to, link.weight);
    }
    Ok(topology)
}

pub fn load_config(path: &str) -> Result<Config, LoadError> {
    let config: Config = read_yaml(path)?;
    config.validate()?;
    Ok(config)
}

fn read_yaml<T>(path: &str) -> Result<T, LoadError>
where T: for<'de> Deserialize<'de> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_owned(), source })?;
    serde_yaml::from_str(&text)
        .map_err(|source| LoadError::Yaml { path: path.to_owned(), source })
}
