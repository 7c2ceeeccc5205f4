use std::thread;
use std::time::Duration;
use enum_dispatch::enum_dispatch;


#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum PacerEnum {
    Sleep,
    NoDelay,
}

/// Cadence between probe samples. Has no effect on the samples themselves.
#[enum_dispatch(PacerEnum)]
pub trait Pacer {
    fn pause(&self);
}


#[derive(Clone, Debug)]
pub struct Sleep {
    interval: Duration,
}

impl Sleep {
    pub fn new(interval: Duration) -> Self {
        Sleep { interval }
    }
}

impl Pacer for Sleep {
    fn pause(&self) {
        thread::sleep(self.interval);
    }
}


#[derive(Clone, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) {}
}


impl PacerEnum {
    /// A zero interval turns pacing off.
    pub fn from_millis(millis: u64) -> Self {
        match millis {
            0 => NoDelay.into(),
            _ => Sleep::new(Duration::from_millis(millis)).into(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    #[test]
    fn it_picks_pacer_from_interval() {
        assert!(matches!(PacerEnum::from_millis(0), PacerEnum::NoDelay(_)));
        assert!(matches!(PacerEnum::from_millis(300), PacerEnum::Sleep(_)));
    }
    #[test]
    fn it_sleeps_between_samples() {
        let pacer = PacerEnum::from_millis(20);
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
