use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Breadth-first traversal following successor edges.  Start nodes that are
/// not in the graph are yielded but have no successors.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    queue: VecDeque<G::Node>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::Node>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: start.into(),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.queue.pop_front() {
            if !self.visited.insert(node.clone()) {
                continue;
            }
            for neighbor in self.graph.successors(node.clone()).into_iter().flatten() {
                if !self.visited.contains(&neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            return Some(node);
        }
        None
    }
}

/// Preorder depth-first traversal following successor edges.
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    stack: Vec<G::Node>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::Node>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if self.visited.insert(node.clone()) {
                let mut successors = self
                    .graph
                    .successors(node.clone())
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>();
                successors.reverse();
                self.stack.extend(successors);
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{builder::GraphBuilder, graph::GraphMut, mutable_graph::MutableGraph};

    use super::*;

    fn create_simple_graph() -> MutableGraph<usize> {
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge(0, 1).unwrap();
        graph.put_edge(0, 2).unwrap();
        graph.put_edge(1, 3).unwrap();
        graph
    }

    fn create_cyclic_graph() -> MutableGraph<usize> {
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge(0, 1).unwrap();
        graph.put_edge(1, 2).unwrap();
        graph.put_edge(2, 0).unwrap();
        graph
    }

    #[test]
    fn test_bfs_simple() {
        let graph = create_simple_graph();
        assert_eq!(graph.bfs(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dfs_simple() {
        let graph = create_simple_graph();
        assert_eq!(graph.dfs(0).collect::<Vec<_>>(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_cycles_terminate() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.bfs(1).collect::<Vec<_>>(), vec![1, 2, 0]);
        assert_eq!(graph.dfs(2).collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn test_undirected_search_reaches_component() {
        let mut graph: MutableGraph<usize> = GraphBuilder::undirected().build();
        graph.put_edge(1, 0).unwrap();
        graph.put_edge(2, 1).unwrap();
        graph.add_node(3);
        let mut reached = graph.bfs(2).collect::<Vec<_>>();
        reached.sort();
        assert_eq!(reached, vec![0, 1, 2]);
    }

    #[test]
    fn test_multiple_starts() {
        let graph = create_simple_graph();
        let search = DfsIterator::new(&graph, vec![3, 2]);
        assert_eq!(search.collect::<Vec<_>>(), vec![3, 2]);
    }
}
