use nalgebra::DMatrix;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph: self loop on node {0}")]
    SelfLoop(usize),

    #[error("graph: node {0} is not in the graph")]
    NodeOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Weights compare equal when both are NaN, both are the same infinity, or
/// are numerically equal.
fn is_same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Undirected graph on nodes `0..n` stored as a dense symmetric adjacency
/// matrix.
///
/// Edges only exist implicitly as weights: an entry equal to `absent` means
/// "no edge", the diagonal holds `self_weight`.
#[derive(Debug, Clone)]
pub struct UndirectedMatrix {
    mat: DMatrix<f64>,
    self_weight: f64,
    absent: f64,
}

impl UndirectedMatrix {
    /// Every off-diagonal entry starts at `init`.
    pub fn new(n: usize, init: f64, self_weight: f64, absent: f64) -> UndirectedMatrix {
        let mut mat = DMatrix::from_element(n, n, init);
        mat.fill_diagonal(self_weight);
        UndirectedMatrix { mat, self_weight, absent }
    }

    pub fn node_count(&self) -> usize {
        self.mat.nrows()
    }

    pub fn has_node(&self, id: usize) -> bool {
        id < self.node_count()
    }

    pub fn nodes(&self) -> Vec<usize> {
        (0..self.node_count()).collect()
    }

    pub fn edges(&self) -> Vec<Edge> {
        let n = self.node_count();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter_map(|(i, j)| self.present_edge(i, j))
            .collect()
    }

    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        if !self.has_node(id) {
            return Vec::new();
        }
        (0..self.node_count())
            .filter(|&i| i != id && !is_same(self.mat[(id, i)], self.absent))
            .collect()
    }

    pub fn has_edge_between(&self, u: usize, v: usize) -> bool {
        self.has_node(u) && self.has_node(v) && u != v && !is_same(self.mat[(u, v)], self.absent)
    }

    pub fn edge_between(&self, u: usize, v: usize) -> Option<Edge> {
        if self.has_edge_between(u, v) {
            self.present_edge(u, v)
        } else {
            None
        }
    }

    fn present_edge(&self, u: usize, v: usize) -> Option<Edge> {
        let weight = self.mat[(u, v)];
        (!is_same(weight, self.absent)).then_some(Edge { from: u, to: v, weight })
    }

    /// Weight between `u` and `v` and whether it is backed by the graph: the
    /// self weight for `u == v`, `absent` with `false` for unknown nodes.
    pub fn weight(&self, u: usize, v: usize) -> (f64, bool) {
        if u == v {
            (self.self_weight, true)
        } else if self.has_node(u) && self.has_node(v) {
            (self.mat[(u, v)], true)
        } else {
            (self.absent, false)
        }
    }

    pub fn set_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.set_weighted_edge(u, v, 1.0)
    }

    pub fn set_weighted_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        for id in [u, v] {
            if !self.has_node(id) {
                return Err(GraphError::NodeOutOfRange(id));
            }
        }
        self.mat[(u, v)] = weight;
        self.mat[(v, u)] = weight;
        Ok(())
    }

    /// No-op when either end is not in the graph.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if u == v || !self.has_node(u) || !self.has_node(v) {
            return;
        }
        self.mat[(u, v)] = self.absent;
        self.mat[(v, u)] = self.absent;
    }

    pub fn degree(&self, id: usize) -> usize {
        self.neighbors(id).len()
    }

    pub fn matrix(&self) -> DMatrix<f64> {
        self.mat.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = UndirectedMatrix::new(4, f64::INFINITY, 0.0, f64::INFINITY);
        graph.set_weighted_edge(0, 2, 3.5).unwrap();
        graph.set_edge(3, 1).unwrap();

        assert!(graph.has_edge_between(2, 0));
        assert_eq!(graph.weight(2, 0), (3.5, true));
        assert_eq!(graph.weight(1, 1), (0.0, true));
        assert_eq!(graph.weight(1, 9), (f64::INFINITY, false));
        assert_eq!(
            graph.edges(),
            vec![
                Edge { from: 0, to: 2, weight: 3.5 },
                Edge { from: 1, to: 3, weight: 1.0 },
            ]
        );
        assert_eq!(graph.neighbors(0), vec![2]);
        assert_eq!(graph.degree(3), 1);
        assert_eq!(graph.degree(7), 0);
        assert_eq!(graph.matrix(), graph.matrix().transpose());
    }

    #[test]
    fn remove_edge_restores_absent() {
        let mut graph = UndirectedMatrix::new(3, f64::NAN, 0.0, f64::NAN);
        graph.set_weighted_edge(0, 1, 2.0).unwrap();
        assert_eq!(graph.edge_between(1, 0), Some(Edge { from: 1, to: 0, weight: 2.0 }));
        graph.remove_edge(1, 0);
        assert!(graph.edges().is_empty());
        assert_eq!(graph.edge_between(0, 1), None);
        graph.remove_edge(0, 5);
    }

    #[test]
    fn rejects_illegal_edges() {
        let mut graph = UndirectedMatrix::new(2, 0.0, 0.0, 0.0);
        assert_eq!(graph.set_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert_eq!(graph.set_edge(0, 2), Err(GraphError::NodeOutOfRange(2)));
        assert_eq!(graph.nodes(), vec![0, 1]);
        assert!(graph.edges().is_empty());
    }
}
