//! 带权图
//!
//! 每条边携带一个有限且非零的实数权重，邻接矩阵中 (u, v) 处的取值
//! 就是边的权重。重复添加同一顶点对会覆盖其权重。

use super::edge::{
    DirectedEdge, EdgeLike, UndirectedEdge, WeightedDirectedEdge, WeightedEdge,
    WeightedUndirectedEdge,
};
use super::graphlike::{GraphParts, Graphlike};
use super::legality::{check_base, check_loop_free, check_weights_match};
use super::matrix::AdjacencyMatrix;
use super::store::GraphStore;
use super::vertex::Vertex;
use crate::algorithm::{self, Distances, ShortestPaths};
use crate::error::Result;
use indexmap::IndexSet;
use tracing::warn;

// ==================== 带权有向图 ====================

/// 带权有向图
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDigraph {
    store: GraphStore<DirectedEdge>,
}

impl WeightedDigraph {
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
        }
    }

    /// 构造带权边形式；权重非法时返回错误
    pub fn edge_form_weighted(
        a: impl Into<Vertex>,
        b: impl Into<Vertex>,
        weight: f64,
    ) -> Result<WeightedDirectedEdge> {
        WeightedEdge::new(DirectedEdge::new(a, b), weight)
    }

    /// 带权有向图特有的检查：不允许自环，矩阵取值等于边的权重
    pub fn is_legal_weighted_digraph(
        edges: &[WeightedDirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_loop_free(edges, matrix)?;
        check_weights_match(edges, matrix)
    }

    /// (u, v) 的边权重；无边时为 `None`
    pub fn weight(&self, u: &Vertex, v: &Vertex) -> Result<Option<f64>> {
        self.store.weight(u, v)
    }

    pub fn in_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.in_degree(vertex)
    }

    pub fn out_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.out_degree(vertex)
    }

    /// 度数之和（入度之和，等于出度之和）
    pub fn sum_of_degrees(&self) -> usize {
        self.store.sum_of_in_degrees()
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> f64 {
        self.store.total_weight()
    }

    /// Dijkstra 单源最短路径
    pub fn dijkstra_distance(&self, source: &Vertex) -> Result<ShortestPaths> {
        algorithm::dijkstra_distance(self, source)
    }
}

impl Default for WeightedDigraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphlike for WeightedDigraph {
    type Edge = WeightedDirectedEdge;

    fn is_legal(
        vertices: &[Vertex],
        edges: &[WeightedDirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_base(vertices, edges, matrix)?;
        Self::is_legal_weighted_digraph(edges, matrix)
    }

    /// 默认权重为 1
    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> WeightedDirectedEdge {
        WeightedEdge::from_stored(DirectedEdge::new(a, b), 1.0)
    }

    fn from_parts(parts: GraphParts<WeightedDirectedEdge>) -> Result<Self> {
        if let Err(e) = Self::is_legal(&parts.vertices, &parts.edges, &parts.adjacency_matrix) {
            warn!(error = %e, "拒绝非法的带权有向图三元组");
            return Err(e);
        }
        Ok(Self {
            store: GraphStore::from_validated(parts.vertices, parts.edges, parts.adjacency_matrix),
        })
    }

    fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

    fn edges(&self) -> Vec<WeightedDirectedEdge> {
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
        I: IntoIterator<Item = WeightedDirectedEdge>,
    {
        self.store
            .add_edges(edges.into_iter().map(WeightedEdge::into_parts))
    }
}

// ==================== 带权无向图 ====================

/// 带权无向图
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    store: GraphStore<UndirectedEdge>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
        }
    }

    /// 构造带权边形式；权重非法时返回错误
    pub fn edge_form_weighted(
        a: impl Into<Vertex>,
        b: impl Into<Vertex>,
        weight: f64,
    ) -> Result<WeightedUndirectedEdge> {
        WeightedEdge::new(UndirectedEdge::new(a, b), weight)
    }

    /// 带权无向图特有的检查：不允许自环，矩阵取值等于边的权重
    pub fn is_legal_weighted_graph(
        edges: &[WeightedUndirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_loop_free(edges, matrix)?;
        check_weights_match(edges, matrix)
    }

    /// {u, v} 的边权重；无边时为 `None`
    pub fn weight(&self, u: &Vertex, v: &Vertex) -> Result<Option<f64>> {
        self.store.weight(u, v)
    }

    pub fn degree(&self, vertex: &Vertex) -> Result<usize> {
        self.store.out_degree(vertex)
    }

    /// 度数之和，等于边数的两倍
    pub fn sum_of_degrees(&self) -> usize {
        self.store.sum_of_out_degrees()
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> f64 {
        self.store.total_weight()
    }

    pub fn is_connected(&self) -> bool {
        algorithm::is_connected(self)
    }

    /// 广度优先距离（按边数计算，忽略权重）
    pub fn breadth_first(&self, source: &Vertex) -> Result<Distances> {
        algorithm::breadth_first(self, source)
    }

    /// Dijkstra 单源最短路径
    pub fn dijkstra_distance(&self, source: &Vertex) -> Result<ShortestPaths> {
        algorithm::dijkstra_distance(self, source)
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graphlike for WeightedGraph {
    type Edge = WeightedUndirectedEdge;

    fn is_legal(
        vertices: &[Vertex],
        edges: &[WeightedUndirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        check_base(vertices, edges, matrix)?;
        Self::is_legal_weighted_graph(edges, matrix)
    }

    /// 默认权重为 1
    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> WeightedUndirectedEdge {
        WeightedEdge::from_stored(UndirectedEdge::new(a, b), 1.0)
    }

    fn from_parts(parts: GraphParts<WeightedUndirectedEdge>) -> Result<Self> {
        if let Err(e) = Self::is_legal(&parts.vertices, &parts.edges, &parts.adjacency_matrix) {
            warn!(error = %e, "拒绝非法的带权无向图三元组");
            return Err(e);
        }
        Ok(Self {
            store: GraphStore::from_validated(parts.vertices, parts.edges, parts.adjacency_matrix),
        })
    }

    fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

    fn edges(&self) -> Vec<WeightedUndirectedEdge> {
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
        I: IntoIterator<Item = WeightedUndirectedEdge>,
    {
        self.store
            .add_edges(edges.into_iter().map(WeightedEdge::into_parts))
    }
}
