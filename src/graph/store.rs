//! 图存储
//!
//! 顶点集合、边映射（顶点对 -> 权重）和邻接矩阵三者的共同载体。
//! 各图类型通过组合该结构共享行为；所有写操作先校验再提交，
//! 校验失败时不修改任何状态。

use crate::error::{Error, Result};
use crate::graph::edge::{check_weight, EdgeLike, VertexPair};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::vertex::Vertex;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GraphStore<P: VertexPair> {
    /// 顶点集合（保持插入顺序）
    vertices: IndexSet<Vertex>,
    /// 顶点对 -> 权重；无权图的权重恒为 1
    edges: IndexMap<P, f64>,
    /// 邻接矩阵
    matrix: AdjacencyMatrix,
}

impl<P: VertexPair> GraphStore<P> {
    pub(crate) fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexMap::new(),
            matrix: AdjacencyMatrix::new(P::DIRECTED),
        }
    }

    /// 由已通过合法性检查的三元组构造
    pub(crate) fn from_validated<E>(
        vertices: Vec<Vertex>,
        edges: Vec<E>,
        matrix: AdjacencyMatrix,
    ) -> Self
    where
        E: EdgeLike<Pair = P>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            edges: edges
                .into_iter()
                .map(|e| {
                    let weight = e.weight();
                    (e.pair().clone(), weight)
                })
                .collect(),
            matrix,
        }
    }

    pub(crate) fn vertices(&self) -> &IndexSet<Vertex> {
        &self.vertices
    }

    pub(crate) fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按插入顺序导出边
    pub(crate) fn edges<E: EdgeLike<Pair = P>>(&self) -> Vec<E> {
        self.edges
            .iter()
            .map(|(pair, weight)| E::from_stored(pair.clone(), *weight))
            .collect()
    }

    /// 遍历顶点对
    pub(crate) fn pairs(&self) -> impl Iterator<Item = &P> + '_ {
        self.edges.keys()
    }

    /// 是否已有该顶点对的边
    pub(crate) fn contains_pair(&self, pair: &P) -> bool {
        self.edges.contains_key(pair)
    }

    pub(crate) fn require_vertex(&self, vertex: &Vertex) -> Result<()> {
        if self.vertices.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex.to_string()))
        }
    }

    /// 获取 (u, v) 的边权重
    pub(crate) fn weight(&self, u: &Vertex, v: &Vertex) -> Result<Option<f64>> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        Ok(self
            .edges
            .get(&P::from_endpoints(u.clone(), v.clone()))
            .copied())
    }

    /// 所有边的权重之和
    pub(crate) fn total_weight(&self) -> f64 {
        self.edges.values().sum()
    }

    // ==================== 写操作 ====================

    /// 添加顶点，已存在的顶点被忽略；返回新增数量
    pub(crate) fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut fresh = Vec::new();
        for vertex in vertices {
            if !self.vertices.contains(&vertex) && !fresh.contains(&vertex) {
                fresh.push(vertex);
            }
        }
        if fresh.is_empty() {
            return 0;
        }

        self.vertices.extend(fresh.iter().cloned());
        self.matrix.extend_with_vertices(&self.vertices, &fresh);

        debug!(
            directed = P::DIRECTED,
            added = fresh.len(),
            total = self.vertices.len(),
            "添加顶点"
        );
        fresh.len()
    }

    /// 校验待添加的边：端点必须已存在、不能是自环、权重合法
    pub(crate) fn stage_edges<I>(&self, edges: I) -> Result<Vec<(P, f64)>>
    where
        I: IntoIterator<Item = (P, f64)>,
    {
        let mut staged = Vec::new();
        for (pair, weight) in edges {
            let (a, b) = pair.endpoints();
            for endpoint in [a, b] {
                if !self.vertices.contains(endpoint) {
                    warn!(edge = %pair, "拒绝添加边: 端点不存在");
                    return Err(Error::VertexNotFound(format!("边 {} 的端点 {}", pair, endpoint)));
                }
            }
            if pair.is_loop() {
                warn!(edge = %pair, "拒绝添加边: 自环");
                return Err(Error::SelfLoop(pair.to_string()));
            }
            if let Err(e) = check_weight(weight) {
                warn!(edge = %pair, weight, "拒绝添加边: 权重非法");
                return Err(e);
            }
            staged.push((pair, weight));
        }
        Ok(staged)
    }

    /// 提交已校验的边；已存在的顶点对会覆盖其权重
    pub(crate) fn commit_edges(&mut self, staged: Vec<(P, f64)>) {
        let count = staged.len();
        for (pair, weight) in staged {
            let (a, b) = pair.endpoints();
            self.matrix.set(a, b, Some(weight));
            self.edges.insert(pair, weight);
        }
        debug!(
            directed = P::DIRECTED,
            added = count,
            total = self.edges.len(),
            "添加边"
        );
    }

    /// 校验并提交
    pub(crate) fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, f64)>,
    {
        let staged = self.stage_edges(edges)?;
        self.commit_edges(staged);
        Ok(())
    }

    // ==================== 度数 ====================

    /// 出度：以 vertex 为起点的边数（无向图即为度数）
    pub(crate) fn out_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.require_vertex(vertex)?;
        Ok(self
            .vertices
            .iter()
            .filter(|other| *other != vertex && self.matrix.weight(vertex, other).is_some())
            .count())
    }

    /// 入度：以 vertex 为终点的边数
    pub(crate) fn in_degree(&self, vertex: &Vertex) -> Result<usize> {
        self.require_vertex(vertex)?;
        Ok(self
            .vertices
            .iter()
            .filter(|other| *other != vertex && self.matrix.weight(other, vertex).is_some())
            .count())
    }

    /// 所有顶点的出度之和
    pub(crate) fn sum_of_out_degrees(&self) -> usize {
        self.vertices
            .iter()
            .map(|v| self.out_degree(v).unwrap_or(0))
            .sum()
    }

    /// 所有顶点的入度之和
    pub(crate) fn sum_of_in_degrees(&self) -> usize {
        self.vertices
            .iter()
            .map(|v| self.in_degree(v).unwrap_or(0))
            .sum()
    }
}
