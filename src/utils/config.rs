use serde::Deserialize;
use argh::FromArgs;
use crate::utils::error::LoadError;
use crate::{JITTER_MAX, JITTER_MIN, MAX_PROBE_COUNT, MAX_PROBE_INTERVAL, PROBE_COUNT, PROBE_INTERVAL};

/// Shortest-path and simulated RTT probes over a three-tier network
#[derive(FromArgs)]
pub struct Arguments {
    /// path to configuration file
    #[argh(option, short='c')]
    pub config: Option<String>,
    /// override topology file instead of the built-in three-tier network
    #[argh(option, short='t')]
    pub topology: Option<String>,
    /// override number of samples per probe
    #[argh(option, short='n')]
    pub count: Option<usize>,
    /// override pause between samples in milliseconds
    #[argh(option, short='i')]
    pub interval: Option<u64>,
    /// override random seed for probe jitter
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// probe source, as address or device name; runs once and exits
    #[argh(option)]
    pub from: Option<String>,
    /// probe destination, as address or device name
    #[argh(option)]
    pub to: Option<String>,
    /// print devices and addresses, then exit
    #[argh(switch)]
    pub list: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub topology: Option<String>,
    pub probe: ProbeConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProbeConfig {
    pub count: usize,
    pub jitter: [f64; 2],
    pub interval: u64,
    pub seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            count: PROBE_COUNT,
            jitter: [JITTER_MIN, JITTER_MAX],
            interval: PROBE_INTERVAL,
            seed: None,
        }
    }
}

impl ProbeConfig {
    pub fn jitter_range(&self) -> (f64, f64) {
        (self.jitter[0], self.jitter[1])
    }
    pub fn validate(&self) -> Result<(), LoadError> {
        let [low, high] = self.jitter;
        if !(1..=MAX_PROBE_COUNT).contains(&self.count) {
            return Err(LoadError::InvalidConfig(
                format!("probe count {} must be within 1..={}", self.count, MAX_PROBE_COUNT)));
        }
        if self.interval > MAX_PROBE_INTERVAL {
            return Err(LoadError::InvalidConfig(
                format!("probe interval {} ms exceeds {} ms", self.interval, MAX_PROBE_INTERVAL)));
        }
        if !(0.0 <= low && low <= high && high.is_finite()) {
            return Err(LoadError::InvalidConfig(
                format!("jitter range [{}, {}] must be finite and ordered", low, high)));
        }
        Ok(())
    }
}

impl Arguments {
    /// Source and destination of a one-shot probe. Both or neither.
    pub fn probe_ends(&self) -> Result<Option<(&str, &str)>, LoadError> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Ok(Some((from.as_str(), to.as_str()))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(LoadError::InvalidConfig("--from requires --to".into())),
            (None, Some(_)) => Err(LoadError::InvalidConfig("--to requires --from".into())),
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(topology) = &args.topology {
            self.topology = Some(topology.clone());
        }
        if let Some(count) = args.count {
            self.probe.count = num::clamp(count, 1, MAX_PROBE_COUNT);
        }
        if let Some(interval) = args.interval {
            self.probe.interval = num::clamp(interval, 0, MAX_PROBE_INTERVAL);
        }
        if let Some(seed) = args.seed {
            self.probe.seed = Some(seed);
        }
    }
    pub fn validate(&self) -> Result<(), LoadError> {
        self.probe.validate()
    }
}
