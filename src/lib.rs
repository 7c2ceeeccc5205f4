pub mod algorithm;
pub mod network;
pub mod probe;
pub mod session;
pub mod utils;

pub use session::{Session, Trace, XProbe};
pub use utils::error::{LoadError, QueryError};

pub const PROBE_COUNT: usize = 3;
pub const PROBE_INTERVAL: u64 = 300;
pub const MAX_PROBE_COUNT: usize = 1000;
pub const MAX_PROBE_INTERVAL: u64 = 60_000;
pub const JITTER_MIN: f64 = 0.1;
pub const JITTER_MAX: f64 = 1.5;
