//! 无向图
//!
//! 边是无序顶点对，邻接矩阵对称；不允许自环，矩阵取值只能是无边、0 或 1。

use super::edge::UndirectedEdge;
use super::graphlike::{GraphParts, Graphlike};
use super::legality::{check_base, check_loop_free, check_unit_entries};
use super::matrix::AdjacencyMatrix;
use super::store::GraphStore;
use super::vertex::Vertex;
use crate::algorithm::{self, Distances, ShortestPaths};
use crate::error::Result;
use indexmap::IndexSet;
use tracing::warn;

/// 简单无向图
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    store: GraphStore<UndirectedEdge>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
        }
    }

    pub(crate) fn from_store(store: GraphStore<UndirectedEdge>) -> Self {
        Self { store }
    }

    /// 无向图特有的检查：不允许自环，矩阵取值只能是无边、0 或 1
    pub fn is_legal_graph(edges: &[UndirectedEdge], matrix: &AdjacencyMatrix) -> Result<()> {
        check_loop_free(edges, matrix)?;
        check_unit_entries(matrix)
    }

    /// 顶点的度数
    pub fn degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.out_degree(vertex)
    }

    /// 度数之和，等于边数的两倍
    pub fn sum_of_degrees(&self) -> usize {
        self.store.sum_of_out_degrees()
    }

    /// 度数序列（降序）
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut seq: Vec<usize> = self
            .store
            .vertices()
            .iter()
            .map(|v| self.store.out_degree(v).unwrap_or(0))
            .collect();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        seq
    }

    /// 是否连通；空图视为连通
    pub fn is_connected(&self) -> bool {
        algorithm::is_connected(self)
    }

    /// 从 source 出发的广度优先距离
    pub fn breadth_first(&self, source: &Vertex) -> Result<Distances> {
        algorithm::breadth_first(self, source)
    }

    /// Dijkstra 单源最短路径，每条边权重为 1
    pub fn dijkstra_distance(&self, source: &Vertex) -> Result<ShortestPaths> {
        algorithm::dijkstra_distance(self, source)
    }

    pub(crate) fn store(&self) -> &GraphStore<UndirectedEdge> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut GraphStore<UndirectedEdge> {
        &mut self.store
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphlike for Graph {
    type Edge = UndirectedEdge;

    fn is_legal(
        vertices: &[Vertex],
        edges: &[UndirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_base(vertices, edges, matrix)?;
        Self::is_legal_graph(edges, matrix)
    }

    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> UndirectedEdge {
        UndirectedEdge::new(a, b)
    }

    fn from_parts(parts: GraphParts<UndirectedEdge>) -> Result<Self> {
        if let Err(e) = Self::is_legal(&parts.vertices, &parts.edges, &parts.adjacency_matrix) {
            warn!(error = %e, "拒绝非法的无向图三元组");
            return Err(e);
        }
        Ok(Self {
            store: GraphStore::from_validated(parts.vertices, parts.edges, parts.adjacency_matrix),
        })
    }

    fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

    fn edges(&self) -> Vec<UndirectedEdge> {
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
        I: IntoIterator<Item = UndirectedEdge>,
    {
        self.store.add_edges(edges.into_iter().map(|e| (e, 1.0)))
    }
}
