use crate::{
    endpoint_pair::EndpointPair, error::GraphError, graph::Graph, views::ValueGraphAsGraph,
};

/// A graph whose edges each carry a value.
///
/// The topology queries come from [`Graph`]; this trait adds access to the
/// value stored on each edge.  For undirected value graphs, the value of the
/// edge between `u` and `v` is the same whichever way round the nodes are
/// given.
pub trait ValueGraph: Graph {
    type Value;

    /// Gets the value of the edge from `u` to `v`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either node is absent and
    /// with [`GraphError::EdgeConnectingNotFound`] if both are present but not
    /// connected.
    fn edge_value(
        &self,
        u: Self::Node,
        v: Self::Node,
    ) -> Result<&Self::Value, GraphError<Self::Node>>;

    /// Gets the value of the edge described by `endpoints`.
    fn edge_value_endpoints(
        &self,
        endpoints: &EndpointPair<Self::Node>,
    ) -> Result<&Self::Value, GraphError<Self::Node>> {
        let (u, v) = endpoints.nodes();
        if self.is_directed() && !endpoints.is_ordered() {
            return Err(GraphError::EdgeConnectingNotFound(u.clone(), v.clone()));
        }
        self.edge_value(u.clone(), v.clone())
    }

    /// Gets the value of the edge from `u` to `v`, or `default` if there is
    /// no such edge or either node is absent.
    fn edge_value_or(&self, u: Self::Node, v: Self::Node, default: Self::Value) -> Self::Value
    where
        Self::Value: Clone,
    {
        self.edge_value(u, v).cloned().unwrap_or(default)
    }

    /// Returns a read-only view of this value graph's topology.
    fn as_graph(&self) -> ValueGraphAsGraph<&Self>
    where
        Self: Sized,
    {
        ValueGraphAsGraph::new(self)
    }
}

/// A value graph that supports mutation.
pub trait ValueGraphMut: ValueGraph {
    /// Adds a node, returning true if it was not already present.
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Sets the value of the edge from `u` to `v`, adding the edge and either
    /// node if absent.  Returns the value previously stored on the edge.
    ///
    /// Fails with [`GraphError::SelfLoopNotAllowed`] if `u == v` and the graph
    /// does not allow self-loops; the graph is unchanged on failure.
    fn put_edge_value(
        &mut self,
        u: Self::Node,
        v: Self::Node,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, GraphError<Self::Node>>;

    /// Adds an edge from `u` to `v` carrying the default value.  An existing
    /// edge keeps its value, and `Ok(false)` is returned.
    fn put_edge(&mut self, u: Self::Node, v: Self::Node) -> Result<bool, GraphError<Self::Node>>
    where
        Self::Value: Default,
    {
        if self.has_edge_connecting(u.clone(), v.clone()) {
            return Ok(false);
        }
        self.put_edge_value(u, v, Self::Value::default())?;
        Ok(true)
    }

    /// Removes a node and every edge incident to it, returning true if the
    /// node was present.
    fn remove_node(&mut self, node: Self::Node) -> bool;

    /// Removes the edge from `u` to `v`, returning its value if it was
    /// present.
    fn remove_edge(&mut self, u: Self::Node, v: Self::Node) -> Option<Self::Value>;

    /// Removes all nodes and edges.
    fn clear(&mut self) {
        for node in self.nodes().collect::<Vec<_>>() {
            self.remove_node(node);
        }
    }

    /// Returns a view of this value graph's topology that can add and remove
    /// edges.  Edges added through the view carry the default value.
    fn as_graph_mut(&mut self) -> ValueGraphAsGraph<&mut Self>
    where
        Self: Sized,
    {
        ValueGraphAsGraph::new(self)
    }
}
