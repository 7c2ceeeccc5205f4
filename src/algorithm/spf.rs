use crate::network::{Network, NodeIndex};
use super::base::dijkstra::{Dijkstra, Route};


/// Shortest-path-first routing table, filled for every source when built.
pub struct SPF {
    dijkstra: Dijkstra,
}

impl SPF {
    pub fn new(network: &Network) -> Self {
        let mut dijkstra = Dijkstra::default();
        dijkstra.compute(network);
        SPF { dijkstra }
    }
    /// `None` means the destination is unreachable from the source.
    pub fn shortest_path(&self, src: NodeIndex, dst: NodeIndex) -> Option<&Route> {
        self.dijkstra.shortest_path(src, dst)
    }
}
