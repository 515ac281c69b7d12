//! 有向图
//!
//! 边是有序顶点对，(v1, v2) 与 (v2, v1) 是不同的边；不允许自环。

use super::edge::DirectedEdge;
use super::graphlike::{GraphParts, Graphlike};
use super::legality::{check_base, check_loop_free, check_unit_entries};
use super::matrix::AdjacencyMatrix;
use super::store::GraphStore;
use super::vertex::Vertex;
use crate::algorithm::{self, ShortestPaths};
use crate::error::Result;
use indexmap::IndexSet;
use tracing::warn;

/// 严格有向图
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph {
    store: GraphStore<DirectedEdge>,
}

impl Digraph {
    /// 创建空有向图
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
        }
    }

    /// 有向图特有的检查：不允许自环
    pub fn is_legal_digraph(edges: &[DirectedEdge], matrix: &AdjacencyMatrix) -> Result<()> {
        check_loop_free(edges, matrix)
    }

    /// 入度
    pub fn in_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.in_degree(vertex)
    }

    /// 出度
    pub fn out_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.out_degree(vertex)
    }

    /// 度数之和
    ///
    /// 所有顶点入度之和等于所有顶点出度之和，这里取入度之和。
    pub fn sum_of_degrees(&self) -> usize {
        self.store.sum_of_in_degrees()
    }

    /// 所有顶点出度之和
    pub fn sum_of_out_degrees(&self) -> usize {
        self.store.sum_of_out_degrees()
    }

    /// Dijkstra 单源最短路径，每条边权重为 1
    pub fn dijkstra_distance(&self, source: &Vertex) -> Result<ShortestPaths> {
        algorithm::dijkstra_distance(self, source)
    }
}

impl Default for Digraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphlike for Digraph {
    type Edge = DirectedEdge;

    fn is_legal(
        vertices: &[Vertex],
        edges: &[DirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_base(vertices, edges, matrix)?;
        Self::is_legal_digraph(edges, matrix)?;
        check_unit_entries(matrix)
    }

    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> DirectedEdge {
        DirectedEdge::new(a, b)
    }

    fn from_parts(parts: GraphParts<DirectedEdge>) -> Result<Self> {
        if let Err(e) = Self::is_legal(&parts.vertices, &parts.edges, &parts.adjacency_matrix) {
            warn!(error = %e, "拒绝非法的有向图三元组");
            return Err(e);
        }
        Ok(Self {
            store: GraphStore::from_validated(parts.vertices, parts.edges, parts.adjacency_matrix),
        })
    }

    fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

    fn edges(&self) -> Vec<DirectedEdge> {
        self.store.edges()
    }

    fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        self.store.matrix()
    }

    fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    fn add_vertices<I, V>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        self.store.add_vertices(vertices.into_iter().map(Into::into));
    }

    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = DirectedEdge>,
    {
        self.store.add_edges(edges.into_iter().map(|e| (e, 1.0)))
    }
}
