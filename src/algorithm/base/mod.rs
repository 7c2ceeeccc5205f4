pub mod dijkstra;
pub mod heap;
