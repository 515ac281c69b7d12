//! Graphlike 能力契约
//!
//! 所有图类型（有向图、无向图、带权变体、树）都直接实现该 trait。
//! 查询类操作以默认方法的形式只通过顶点集合与邻接矩阵实现，
//! 因此各类型只需提供存储访问、边的构造与合法性检查。

use crate::error::{Error, Result};
use crate::graph::edge::{EdgeLike, VertexPair};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::vertex::Vertex;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// {顶点, 边, 邻接矩阵} 三元组
///
/// 可以序列化后原样还原；还原时会重新执行合法性检查。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphParts<E> {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<E>,
    pub adjacency_matrix: AdjacencyMatrix,
}

pub trait Graphlike: Sized {
    /// 该图类型使用的边形式
    type Edge: EdgeLike;

    // ==================== 类型级操作 ====================

    /// 检查三元组对该图类型是否合法
    fn is_legal(vertices: &[Vertex], edges: &[Self::Edge], matrix: &AdjacencyMatrix)
        -> Result<()>;

    /// 构造 (a, b) 的边形式，不论其是否已是图中的边
    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> Self::Edge;

    /// 由合法的三元组构造图
    fn from_parts(parts: GraphParts<Self::Edge>) -> Result<Self>;

    // ==================== 存储访问 ====================

    /// 顶点集合
    fn vertices(&self) -> &IndexSet<Vertex>;

    /// 边集合（按插入顺序）
    fn edges(&self) -> Vec<Self::Edge>;

    /// 邻接矩阵
    fn adjacency_matrix(&self) -> &AdjacencyMatrix;

    /// 边数量
    fn edge_count(&self) -> usize;

    // ==================== 写操作 ====================

    /// 添加顶点，同时为其扩展邻接矩阵的行和列；已存在的顶点被忽略
    fn add_vertices<I, V>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>;

    /// 添加边；任意一条边非法时整批拒绝，图保持不变
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Edge>;

    /// 添加单个顶点
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) {
        self.add_vertices(std::iter::once(vertex.into()));
    }

    /// 添加单条边
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        self.add_edges(std::iter::once(edge))
    }

    /// 以新的三元组整体替换当前状态；不合法时保持原状态
    fn replace(&mut self, parts: GraphParts<Self::Edge>) -> Result<()> {
        *self = Self::from_parts(parts)?;
        Ok(())
    }

    // ==================== 查询 ====================

    /// 是否为有向图
    fn is_directed(&self) -> bool {
        <<Self::Edge as EdgeLike>::Pair as VertexPair>::DIRECTED
    }

    /// 顶点数量
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// 是否包含顶点
    fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.vertices().contains(vertex)
    }

    /// 顶点必须存在，否则返回 [`Error::VertexNotFound`]
    fn require_vertex(&self, vertex: &Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex.to_string()))
        }
    }

    /// 判断边是否存在；带权图只比较顶点对，不比较权重
    ///
    /// 两个端点都必须是图中的顶点。
    fn is_edge(&self, edge: &Self::Edge) -> Result<bool> {
        let (a, b) = edge.pair().endpoints();
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        Ok(a != b && self.adjacency_matrix().weight(a, b).is_some())
    }

    /// 返回从 vertex 到 others 中第一个相连顶点的边；都不相连时返回 `None`
    ///
    /// others 中任一顶点不存在时返回 [`Error::VertexNotFound`]。
    fn has_an_edge_with(&self, vertex: &Vertex, others: &[Vertex]) -> Result<Option<Self::Edge>> {
        self.require_vertex(vertex)?;
        for other in others {
            self.require_vertex(other)?;
        }
        for other in others {
            if other == vertex {
                continue;
            }
            if let Some(weight) = self.adjacency_matrix().weight(vertex, other) {
                let form = Self::edge_form(vertex.clone(), other.clone());
                let pair = form.pair().clone();
                return Ok(Some(<Self::Edge as EdgeLike>::from_stored(pair, weight)));
            }
        }
        Ok(None)
    }

    /// 与 vertex 相邻的顶点；有向图为出边指向的顶点
    fn adjacent(&self, vertex: &Vertex) -> Result<IndexSet<Vertex>> {
        self.require_vertex(vertex)?;
        let matrix = self.adjacency_matrix();
        Ok(self
            .vertices()
            .iter()
            .filter(|other| *other != vertex && matrix.weight(vertex, other).is_some())
            .cloned()
            .collect())
    }

    /// 除 excluded 以外的所有顶点
    fn other_vertices(&self, excluded: &[Vertex]) -> IndexSet<Vertex> {
        self.vertices()
            .iter()
            .filter(|v| !excluded.contains(v))
            .cloned()
            .collect()
    }

    /// 对当前状态重新执行合法性检查
    fn validate(&self) -> Result<()> {
        let vertices: Vec<Vertex> = self.vertices().iter().cloned().collect();
        Self::is_legal(&vertices, &self.edges(), self.adjacency_matrix())
    }

    /// 导出三元组
    fn to_parts(&self) -> GraphParts<Self::Edge> {
        GraphParts {
            vertices: self.vertices().iter().cloned().collect(),
            edges: self.edges(),
            adjacency_matrix: self.adjacency_matrix().clone(),
        }
    }
}
