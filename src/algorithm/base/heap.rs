use std::cmp::Reverse;
use priority_queue::PriorityQueue;


pub type MyMinHeap<I, K> = PriorityQueue<I, Priority<K>>;


/// Inverts the ordering of `K` so the max-heap pops the smallest key first.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority<K: Ord> (Reverse<K>);

impl<K: Ord> Priority<K> {
    pub fn key(&self) -> &K {
        &(self.0).0
    }
    pub fn into_key(self) -> K {
        (self.0).0
    }
}

impl<K: Ord> From<K> for Priority<K> {
    fn from(key: K) -> Self {
        Self (Reverse(key))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_pops_smallest_key_first() {
        let mut heap: MyMinHeap<&str, (u64, u8)> = MyMinHeap::new();
        heap.push("b", (3, 0).into());
        heap.push("a", (1, 9).into());
        heap.push("c", (1, 2).into());
        heap.push("b", (0, 0).into());
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|(item, priority)| (item, priority.into_key()))
            .collect();
        assert_eq!(order, vec![("b", (0, 0)), ("c", (1, 2)), ("a", (1, 9))]);
    }
}
