use hashbrown::{HashMap, HashSet};

use super::heap::MyMinHeap;
use crate::network::{Network, NodeIndex, Path};


/// A least-cost path together with its total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub cost: u64,
    pub path: Path,
}

/// Frontier key. Cost decides first, then the device names along the path,
/// so equal-cost paths always resolve to the lexicographically smallest one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Tentative<'a> {
    cost: u64,
    names: Vec<&'a str>,
    path: Path,
}

impl<'a> Tentative<'a> {
    fn origin(graph: &'a Network, root: NodeIndex) -> Self {
        Tentative { cost: 0, names: vec![graph.name(root)], path: vec![root] }
    }
    fn extend(&self, graph: &'a Network, node: NodeIndex, weight: u32) -> Self {
        let mut next = self.clone();
        next.cost += u64::from(weight);
        next.names.push(graph.name(node));
        next.path.push(node);
        next
    }
}

impl From<&Tentative<'_>> for Route {
    fn from(tentative: &Tentative) -> Self {
        Route { cost: tentative.cost, path: tentative.path.clone() }
    }
}


#[derive(Default)]
pub struct Dijkstra {
    routes: HashMap<(NodeIndex, NodeIndex), Route>,
    roots: HashSet<NodeIndex>,
}


impl Dijkstra {
    pub fn compute(&mut self, graph: &Network) {
        for root in graph.nodes() {
            self.compute_once(graph, root);
        }
    }
    /// Returns how many routes were finalized from `r`, zero when `r` was
    /// already computed.
    pub fn compute_once(&mut self, graph: &Network, r: NodeIndex) -> usize {
        if !self.roots.insert(r) { return 0 }
        let mut heap = MyMinHeap::new();
        heap.push(r, Tentative::origin(graph, r).into());

        let mut finalized = 0;
        // a node popped from the heap is final and never expanded again
        while let Some((v, priority)) = heap.pop() {
            let rv = priority.into_key();
            self.routes.insert((r, v), Route::from(&rv));
            finalized += 1;
            for (u, weight) in graph.neighbors(v) {
                if self.routes.contains_key(&(r, u)) { continue; }
                let ru = rv.extend(graph, u, weight);
                let improves = match heap.get_priority(&u) {
                    Some(known) => ru < *known.key(),
                    None        => true,
                };
                if improves {
                    heap.push(u, ru.into());
                }
            }
        }
        log::debug!("computed {} routes from {}", finalized, graph.name(r));
        finalized
    }
    pub fn shortest_path(&self, src: NodeIndex, dst: NodeIndex) -> Option<&Route> {
        self.routes.get(&(src, dst))
    }
}
