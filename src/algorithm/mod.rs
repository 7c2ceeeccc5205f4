mod base;
mod spf;

pub use base::dijkstra::{Dijkstra, Route};
pub use spf::SPF;
