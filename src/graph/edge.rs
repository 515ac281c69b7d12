//! 边定义
//!
//! 有向边是有序顶点对，无向边是无序顶点对（按端点大小规范化存储），
//! 带权边在顶点对之上附加一个实数权重。

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// 顶点对：邻接矩阵和边存储的键
pub trait VertexPair: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// 是否为有序对
    const DIRECTED: bool;

    /// 由两个端点构造顶点对
    fn from_endpoints(a: Vertex, b: Vertex) -> Self;

    /// 获取两个端点；无向边返回规范化后的顺序
    fn endpoints(&self) -> (&Vertex, &Vertex);

    /// 是否为自环
    fn is_loop(&self) -> bool {
        let (a, b) = self.endpoints();
        a == b
    }
}

/// 图中可存放的边：顶点对加权重
pub trait EdgeLike: Clone + fmt::Debug + fmt::Display + Serialize + DeserializeOwned {
    type Pair: VertexPair;

    /// 获取顶点对
    fn pair(&self) -> &Self::Pair;

    /// 获取权重（无权边恒为 1）
    fn weight(&self) -> f64;

    /// 由存储中的顶点对和权重还原边
    fn from_stored(pair: Self::Pair, weight: f64) -> Self;
}

/// 检查权重：必须是有限且非零的实数
pub fn check_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(Error::InvalidWeight(format!("权重必须是有限实数, 实际为 {}", weight)));
    }
    if weight == 0.0 {
        return Err(Error::InvalidWeight("权重 0 与无边不可区分".to_string()));
    }
    Ok(weight)
}

// ==================== 有向边 ====================

/// 有向边：(src, dst) 与 (dst, src) 是不同的边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Vertex, Vertex)", into = "(Vertex, Vertex)")]
pub struct DirectedEdge {
    src: Vertex,
    dst: Vertex,
}

impl DirectedEdge {
    /// 创建有向边
    pub fn new(src: impl Into<Vertex>, dst: impl Into<Vertex>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }

    /// 获取源顶点
    pub fn src(&self) -> &Vertex {
        &self.src
    }

    /// 获取目标顶点
    pub fn dst(&self) -> &Vertex {
        &self.dst
    }

    /// 反向边
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dst.clone(),
            dst: self.src.clone(),
        }
    }
}

impl From<(Vertex, Vertex)> for DirectedEdge {
    fn from((src, dst): (Vertex, Vertex)) -> Self {
        Self { src, dst }
    }
}

impl From<DirectedEdge> for (Vertex, Vertex) {
    fn from(edge: DirectedEdge) -> Self {
        (edge.src, edge.dst)
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.src, self.dst)
    }
}

impl VertexPair for DirectedEdge {
    const DIRECTED: bool = true;

    fn from_endpoints(a: Vertex, b: Vertex) -> Self {
        Self { src: a, dst: b }
    }

    fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.src, &self.dst)
    }
}

impl EdgeLike for DirectedEdge {
    type Pair = DirectedEdge;

    fn pair(&self) -> &Self::Pair {
        self
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn from_stored(pair: Self::Pair, _weight: f64) -> Self {
        pair
    }
}

// ==================== 无向边 ====================

/// 无向边：端点按 [`Vertex`] 的顺序规范化，因此 {a, b} == {b, a}
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Vertex, Vertex)", into = "(Vertex, Vertex)")]
pub struct UndirectedEdge {
    low: Vertex,
    high: Vertex,
}

impl UndirectedEdge {
    /// 创建无向边
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// 是否以 vertex 为端点
    pub fn contains(&self, vertex: &Vertex) -> bool {
        &self.low == vertex || &self.high == vertex
    }

    /// 获取另一个端点
    pub fn other(&self, vertex: &Vertex) -> Option<&Vertex> {
        if &self.low == vertex {
            Some(&self.high)
        } else if &self.high == vertex {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl From<(Vertex, Vertex)> for UndirectedEdge {
    fn from((a, b): (Vertex, Vertex)) -> Self {
        Self::new(a, b)
    }
}

impl From<UndirectedEdge> for (Vertex, Vertex) {
    fn from(edge: UndirectedEdge) -> Self {
        (edge.low, edge.high)
    }
}

impl fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

impl VertexPair for UndirectedEdge {
    const DIRECTED: bool = false;

    fn from_endpoints(a: Vertex, b: Vertex) -> Self {
        Self::new(a, b)
    }

    fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.low, &self.high)
    }
}

impl EdgeLike for UndirectedEdge {
    type Pair = UndirectedEdge;

    fn pair(&self) -> &Self::Pair {
        self
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn from_stored(pair: Self::Pair, _weight: f64) -> Self {
        pair
    }
}

// ==================== 带权边 ====================

/// 带权边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<P> {
    pair: P,
    weight: f64,
}

/// 带权有向边
pub type WeightedDirectedEdge = WeightedEdge<DirectedEdge>;

/// 带权无向边
pub type WeightedUndirectedEdge = WeightedEdge<UndirectedEdge>;

impl<P: VertexPair> WeightedEdge<P> {
    /// 创建带权边，权重必须是有限且非零的实数
    pub fn new(pair: P, weight: f64) -> Result<Self> {
        Ok(Self {
            pair,
            weight: check_weight(weight)?,
        })
    }

    /// 拆分为顶点对和权重
    pub fn into_parts(self) -> (P, f64) {
        (self.pair, self.weight)
    }
}

impl<P: VertexPair> fmt::Display for WeightedEdge<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pair, self.weight)
    }
}

impl<P> EdgeLike for WeightedEdge<P>
where
    P: VertexPair + Serialize + DeserializeOwned,
{
    type Pair = P;

    fn pair(&self) -> &Self::Pair {
        &self.pair
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn from_stored(pair: Self::Pair, weight: f64) -> Self {
        Self { pair, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_directed_edge_is_ordered() {
        let e = DirectedEdge::new(1, 2);
        assert_ne!(e, DirectedEdge::new(2, 1));
        assert_eq!(e.reversed(), DirectedEdge::new(2, 1));
        assert_eq!(e.src(), &Vertex::from(1));
        assert_eq!(e.dst(), &Vertex::from(2));
    }

    #[test]
    fn test_undirected_edge_is_canonical() {
        let e = UndirectedEdge::new("b", "a");
        assert_eq!(e, UndirectedEdge::new("a", "b"));
        assert_eq!(e.endpoints(), (&Vertex::from("a"), &Vertex::from("b")));
        assert_eq!(e.other(&Vertex::from("a")), Some(&Vertex::from("b")));
        assert!(e.other(&Vertex::from("c")).is_none());
        assert!(UndirectedEdge::new(3, 3).is_loop());
    }

    #[test]
    fn test_weighted_edge_rejects_bad_weights() {
        for w in [f64::NAN, f64::INFINITY, 0.0] {
            let err = WeightedEdge::new(DirectedEdge::new(1, 2), w).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Edge);
        }
        let e = WeightedEdge::new(UndirectedEdge::new(2, 1), -2.5).unwrap();
        assert_eq!(e.weight(), -2.5);
        assert_eq!(e.to_string(), "{1, 2}: -2.5");
    }

    #[test]
    fn test_undirected_edge_deserialization_canonicalizes() {
        let e: UndirectedEdge = serde_json::from_str(r#"["z", "a"]"#).unwrap();
        assert_eq!(e, UndirectedEdge::new("a", "z"));
    }
}
