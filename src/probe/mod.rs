//! Synthetic RTT sampling. Nothing is sent on any wire: each sample is the
//! round trip over a path cost plus uniform jitter.

mod pacer;

pub use pacer::{NoDelay, Pacer, PacerEnum, Sleep};

use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use crate::utils::config::ProbeConfig;
use crate::utils::error::LoadError;


#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProbeSample {
    pub seq: usize,
    pub rtt: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProbeResult {
    pub samples: Vec<ProbeSample>,
    pub mean: f64,
}

impl ProbeResult {
    fn from_samples(samples: Vec<ProbeSample>) -> Self {
        let mean = match samples.len() {
            0 => 0.0,
            n => samples.iter().map(|s| s.rtt).sum::<f64>() / n as f64,
        };
        ProbeResult { samples, mean }
    }
    pub fn min(&self) -> Option<f64> {
        self.rtts().min().map(OrderedFloat::into_inner)
    }
    pub fn max(&self) -> Option<f64> {
        self.rtts().max().map(OrderedFloat::into_inner)
    }
    fn rtts(&self) -> impl Iterator<Item=OrderedFloat<f64>> + '_ {
        self.samples.iter().map(|s| OrderedFloat(s.rtt))
    }
}


pub struct ProbeSimulator {
    rng: ChaChaRng,
    count: usize,
    jitter: (f64, f64),
    pacer: PacerEnum,
}

impl ProbeSimulator {
    /// Fails on any config that `ProbeConfig::validate` rejects.
    pub fn new(config: &ProbeConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None       => ChaChaRng::from_entropy(),
        };
        let pacer = PacerEnum::from_millis(config.interval);
        Ok(ProbeSimulator { rng, count: config.count, jitter: config.jitter_range(), pacer })
    }
    pub fn with_pacer(mut self, pacer: PacerEnum) -> Self {
        self.pacer = pacer;
        self
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn simulate(&mut self, cost: u64) -> ProbeResult {
        self.simulate_with(cost, |_| {})
    }
    /// Hands every sample to `report` as soon as it is drawn, pausing in
    /// between samples but not after the last.
    pub fn simulate_with<F>(&mut self, cost: u64, mut report: F) -> ProbeResult
    where F: FnMut(&ProbeSample) {
        let round_trip = 2.0 * cost as f64;
        let (low, high) = self.jitter;
        let mut samples = Vec::with_capacity(self.count);
        for seq in 1..=self.count {
            if seq > 1 {
                self.pacer.pause();
            }
            let rtt = round_trip + self.rng.gen_range(low..=high);
            let sample = ProbeSample { seq, rtt };
            log::trace!("probe seq={} rtt={:.3}", seq, rtt);
            report(&sample);
            samples.push(sample);
        }
        ProbeResult::from_samples(samples)
    }
}
