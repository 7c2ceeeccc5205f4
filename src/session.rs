use crate::algorithm::{Route, SPF};
use crate::network::{DeviceListing, NodeIndex, Role, Topology};
use crate::probe::{ProbeResult, ProbeSample, ProbeSimulator};
use crate::utils::config::Config;
use crate::utils::error::{LoadError, QueryError};


/// Route between two resolved devices, with the device names spelled out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub cost: u64,
    pub hops: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct XProbe {
    pub trace: Trace,
    pub result: ProbeResult,
}

struct Loaded {
    topology: Topology,
    spf: SPF,
}

/// Owns the topology from the moment it is loaded. Loading happens once;
/// every query before that reports `QueryError::NotReady`.
pub struct Session {
    loaded: Option<Loaded>,
    simulator: ProbeSimulator,
}


impl Session {
    pub fn new(config: &Config) -> Result<Self, LoadError> {
        let simulator = ProbeSimulator::new(&config.probe)?;
        Ok(Session { loaded: None, simulator })
    }
    pub fn with_simulator(simulator: ProbeSimulator) -> Self {
        Session { loaded: None, simulator }
    }
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
    pub fn load(&mut self, topology: Topology) -> Result<(), LoadError> {
        if self.is_loaded() {
            return Err(LoadError::AlreadyLoaded);
        }
        let spf = SPF::new(&topology.network);
        log::info!("loaded topology with {} hosts and {} routers, {} links",
                   topology.count_role(Role::Host),
                   topology.device_count() - topology.count_role(Role::Host),
                   topology.network.link_count());
        self.loaded = Some(Loaded { topology, spf });
        Ok(())
    }
    pub fn topology(&self) -> Result<&Topology, QueryError> {
        self.state().map(|loaded| &loaded.topology)
    }
    pub fn resolve(&self, token: &str) -> Result<NodeIndex, QueryError> {
        let topology = self.topology()?;
        topology.resolve(token).ok_or_else(|| {
            log::warn!("no address or device matches {:?}", token);
            QueryError::NotFound(token.trim().to_owned())
        })
    }
    /// `Ok(None)` means both ends exist but no route connects them.
    pub fn shortest_path(&self, source: &str, dest: &str)
        -> Result<Option<Trace>, QueryError> {
        let src = self.resolve(source)?;
        let dst = self.resolve(dest)?;
        let loaded = self.state()?;
        Ok(loaded.spf.shortest_path(src, dst)
            .map(|route| loaded.trace(route)))
    }
    pub fn simulate_probe(&mut self, cost: u64) -> Result<ProbeResult, QueryError> {
        self.state()?;
        Ok(self.simulator.simulate(cost))
    }
    /// Resolves both ends, routes between them and probes the route.
    /// Samples are handed to `report` while the probe runs.
    pub fn xprobe<F>(&mut self, source: &str, dest: &str, mut report: F)
        -> Result<Option<XProbe>, QueryError>
    where F: FnMut(&Trace, &ProbeSample) {
        let trace = match self.shortest_path(source, dest)? {
            Some(trace) => trace,
            None => return Ok(None),
        };
        let result = self.simulator
            .simulate_with(trace.cost, |sample| report(&trace, sample));
        Ok(Some(XProbe { trace, result }))
    }
    pub fn listing(&self) -> Result<Vec<DeviceListing>, QueryError> {
        Ok(self.topology()?.listing())
    }
    pub fn listing_by_role(&self) -> Result<Vec<(Option<Role>, Vec<DeviceListing>)>, QueryError> {
        Ok(self.topology()?.listing_by_role())
    }
    fn state(&self) -> Result<&Loaded, QueryError> {
        self.loaded.as_ref().ok_or(QueryError::NotReady)
    }
}

impl Loaded {
    fn trace(&self, route: &Route) -> Trace {
        let hops = self.topology.network.node_sequence(&route.path)
            .into_iter()
            .map(String::from)
            .collect();
        Trace { cost: route.cost, hops }
    }
}
