//! 合法性检查
//!
//! 各图类型的 `is_legal` 由这里的检查函数组合而成：
//! - [`check_base`]：所有图类型共享的顶点/边/矩阵一致性检查
//! - [`check_loop_free`]：严格图不允许自环
//! - [`check_unit_entries`]：无权图的矩阵取值只能是 0 或 1
//! - [`check_weights_match`]：带权图的矩阵取值必须等于边权重
//! - [`check_forest`] / [`check_tree`]：树的无环与连通约束

use crate::error::{Error, Result};
use crate::graph::edge::{check_weight, EdgeLike, VertexPair};
use crate::graph::matrix::{is_edge_value, AdjacencyMatrix};
use crate::graph::vertex::Vertex;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// 共享的基础检查
///
/// 顶点与边各自构成集合；边的端点都是顶点；矩阵方向与边类型一致；
/// 每对不同顶点在矩阵中都有条目；矩阵索引只引用已知顶点；矩阵中的
/// 非零值都对应一条边，且每条边在矩阵中都有非零值。
pub fn check_base<E: EdgeLike>(
    vertices: &[Vertex],
    edges: &[E],
    matrix: &AdjacencyMatrix,
) -> Result<()> {
    let mut vertex_set = IndexSet::with_capacity(vertices.len());
    for vertex in vertices {
        if !vertex_set.insert(vertex) {
            return Err(Error::DuplicateVertex(vertex.to_string()));
        }
    }

    if matrix.is_directed() != E::Pair::DIRECTED {
        return Err(Error::OrientationMismatch(format!(
            "期望{}矩阵",
            if E::Pair::DIRECTED { "有向" } else { "无向" }
        )));
    }

    let mut pairs = HashSet::with_capacity(edges.len());
    for edge in edges {
        let pair = edge.pair();
        if !pairs.insert(pair) {
            return Err(Error::DuplicateEdge(pair.to_string()));
        }
        let (a, b) = pair.endpoints();
        for endpoint in [a, b] {
            if !vertex_set.contains(endpoint) {
                return Err(Error::VertexNotFound(format!("边 {} 的端点 {}", pair, endpoint)));
            }
        }
        check_weight(edge.weight())?;
    }

    for u in &vertex_set {
        for v in &vertex_set {
            if u != v && !matrix.contains(u, v) {
                return Err(Error::MissingMatrixEntry(format!("({}, {})", u, v)));
            }
        }
    }

    for (u, v, value) in matrix.iter() {
        if !vertex_set.contains(u) {
            return Err(Error::NonVertexIndex(format!("({}, {}) 中的 {}", u, v, u)));
        }
        if !vertex_set.contains(v) {
            return Err(Error::NonVertexIndex(format!("({}, {}) 中的 {}", u, v, v)));
        }
        if u == v {
            continue;
        }
        let pair = E::Pair::from_endpoints(u.clone(), v.clone());
        if is_edge_value(value) && !pairs.contains(&pair) {
            return Err(Error::NonEdgeValue(format!("({}, {}) = {:?}", u, v, value)));
        }
    }

    for edge in edges {
        let (a, b) = edge.pair().endpoints();
        if matrix.weight(a, b).is_none() {
            return Err(Error::EdgeNotRepresented(edge.pair().to_string()));
        }
    }

    Ok(())
}

/// 严格图：没有自环边，矩阵对角线为空或为 0
pub fn check_loop_free<E: EdgeLike>(edges: &[E], matrix: &AdjacencyMatrix) -> Result<()> {
    if let Some(edge) = edges.iter().find(|e| e.pair().is_loop()) {
        return Err(Error::SelfLoop(edge.pair().to_string()));
    }
    if let Some((u, _, value)) = matrix
        .iter()
        .find(|(u, v, value)| u == v && is_edge_value(*value))
    {
        return Err(Error::SelfLoop(format!("矩阵对角线 ({}, {}) = {:?}", u, u, value)));
    }
    Ok(())
}

/// 无权图：矩阵取值只能是无边、0 或 1
pub fn check_unit_entries(matrix: &AdjacencyMatrix) -> Result<()> {
    for (u, v, value) in matrix.iter() {
        if let Some(w) = value {
            if w != 0.0 && w != 1.0 {
                return Err(Error::InvalidMatrixValue(format!("({}, {}) = {}", u, v, w)));
            }
        }
    }
    Ok(())
}

/// 带权图：每条边在矩阵中的取值必须等于其权重
pub fn check_weights_match<E: EdgeLike>(edges: &[E], matrix: &AdjacencyMatrix) -> Result<()> {
    for edge in edges {
        let (a, b) = edge.pair().endpoints();
        let actual = matrix.entry(a, b).flatten().unwrap_or(0.0);
        if actual != edge.weight() {
            return Err(Error::WeightMismatch {
                expected: edge.weight(),
                actual,
            });
        }
    }
    Ok(())
}

/// 森林：边集中没有环
pub fn check_forest<'a, I>(vertices: &[Vertex], pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a Vertex, &'a Vertex)>,
{
    let mut sets = DisjointSets::new(vertices.iter());
    for (a, b) in pairs {
        sets.require_endpoints(a, b)?;
        if !sets.union(a, b) {
            return Err(Error::CycleDetected(format!("{{{}, {}}}", a, b)));
        }
    }
    Ok(())
}

/// 树：无环且连通（空图视为树）
pub fn check_tree<'a, I>(vertices: &[Vertex], pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a Vertex, &'a Vertex)>,
{
    let mut sets = DisjointSets::new(vertices.iter());
    for (a, b) in pairs {
        sets.require_endpoints(a, b)?;
        if !sets.union(a, b) {
            return Err(Error::NotATree(format!("边 {{{}, {}}} 形成环", a, b)));
        }
    }
    let components = sets.component_count();
    if components > 1 {
        return Err(Error::NotATree(format!("存在 {} 个连通分量", components)));
    }
    Ok(())
}

/// 并查集，用于环检测
pub(crate) struct DisjointSets<'a> {
    parent: HashMap<&'a Vertex, &'a Vertex>,
    components: usize,
}

impl<'a> DisjointSets<'a> {
    pub(crate) fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a Vertex>,
    {
        let parent: HashMap<&Vertex, &Vertex> = vertices.into_iter().map(|v| (v, v)).collect();
        let components = parent.len();
        Self { parent, components }
    }

    pub(crate) fn contains(&self, vertex: &Vertex) -> bool {
        self.parent.contains_key(vertex)
    }

    /// 两个端点都必须属于顶点集合
    fn require_endpoints(&self, a: &Vertex, b: &Vertex) -> Result<()> {
        for endpoint in [a, b] {
            if !self.contains(endpoint) {
                return Err(Error::VertexNotFound(format!(
                    "边 {{{}, {}}} 的端点 {}",
                    a, b, endpoint
                )));
            }
        }
        Ok(())
    }

    fn find(&mut self, vertex: &'a Vertex) -> &'a Vertex {
        let mut root = vertex;
        while let Some(&p) = self.parent.get(root) {
            if p == root {
                break;
            }
            root = p;
        }
        // 路径压缩
        let mut current = vertex;
        while current != root {
            match self.parent.insert(current, root) {
                Some(next) => current = next,
                None => break,
            }
        }
        root
    }

    /// 合并两个集合；两者已在同一集合或任一顶点不在集合中时返回 false
    pub(crate) fn union(&mut self, a: &'a Vertex, b: &'a Vertex) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent.insert(ra, rb);
        self.components -= 1;
        true
    }

    pub(crate) fn component_count(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::edge::{DirectedEdge, UndirectedEdge, WeightedEdge};

    fn v(n: i64) -> Vertex {
        Vertex::from(n)
    }

    fn full_matrix(directed: bool, vertices: &[Vertex]) -> AdjacencyMatrix {
        let mut m = AdjacencyMatrix::new(directed);
        m.extend_with_vertices(vertices, vertices);
        m
    }

    #[test]
    fn test_base_accepts_consistent_triple() {
        let vertices = vec![v(1), v(2), v(3)];
        let mut m = full_matrix(false, &vertices);
        m.set(&v(1), &v(2), Some(1.0));
        let edges = vec![UndirectedEdge::new(2, 1)];

        check_base(&vertices, &edges, &m).unwrap();
        check_loop_free(&edges, &m).unwrap();
        check_unit_entries(&m).unwrap();
    }

    #[test]
    fn test_base_rejects_duplicates() {
        let vertices = vec![v(1), v(1)];
        let m = full_matrix(true, &vertices);
        let err = check_base::<DirectedEdge>(&vertices, &[], &m).unwrap_err();
        assert_eq!(err, Error::DuplicateVertex("1".into()));

        let vertices = vec![v(1), v(2)];
        let mut m = full_matrix(true, &vertices);
        m.set(&v(1), &v(2), Some(1.0));
        let edges = vec![DirectedEdge::new(1, 2), DirectedEdge::new(1, 2)];
        let err = check_base(&vertices, &edges, &m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Edge);
    }

    #[test]
    fn test_base_matrix_errors() {
        let vertices = vec![v(1), v(2)];

        // 缺少条目
        let m = AdjacencyMatrix::directed();
        let err = check_base::<DirectedEdge>(&vertices, &[], &m).unwrap_err();
        assert!(matches!(err, Error::MissingMatrixEntry(_)));

        // 非顶点索引
        let mut m = full_matrix(true, &vertices);
        m.set(&v(1), &v(9), None);
        let err = check_base::<DirectedEdge>(&vertices, &[], &m).unwrap_err();
        assert!(matches!(err, Error::NonVertexIndex(_)));

        // 无边位置的非零值
        let mut m = full_matrix(true, &vertices);
        m.set(&v(2), &v(1), Some(1.0));
        let err = check_base::<DirectedEdge>(&vertices, &[], &m).unwrap_err();
        assert!(matches!(err, Error::NonEdgeValue(_)));

        // 边未表示
        let m = full_matrix(true, &vertices);
        let err = check_base(&vertices, &[DirectedEdge::new(1, 2)], &m).unwrap_err();
        assert!(matches!(err, Error::EdgeNotRepresented(_)));

        // 方向不符
        let m = full_matrix(false, &vertices);
        let err = check_base::<DirectedEdge>(&vertices, &[], &m).unwrap_err();
        assert!(matches!(err, Error::OrientationMismatch(_)));
        assert_eq!(err.kind(), ErrorKind::Matrix);
    }

    #[test]
    fn test_edge_with_unknown_endpoint() {
        let vertices = vec![v(1)];
        let m = full_matrix(true, &vertices);
        let err = check_base(&vertices, &[DirectedEdge::new(1, 2)], &m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Vertex);
    }

    #[test]
    fn test_loop_free() {
        let mut m = AdjacencyMatrix::directed();
        m.set(&v(1), &v(1), Some(1.0));
        let err = check_loop_free::<DirectedEdge>(&[], &m).unwrap_err();
        assert!(matches!(err, Error::SelfLoop(_)));

        let err = check_loop_free(&[DirectedEdge::new(2, 2)], &AdjacencyMatrix::directed())
            .unwrap_err();
        assert!(matches!(err, Error::SelfLoop(_)));

        let mut m = AdjacencyMatrix::directed();
        m.set(&v(1), &v(1), Some(0.0));
        check_loop_free::<DirectedEdge>(&[], &m).unwrap();
    }

    #[test]
    fn test_unit_entries_and_weights() {
        let mut m = AdjacencyMatrix::undirected();
        m.set(&v(1), &v(2), Some(2.0));
        assert!(matches!(
            check_unit_entries(&m),
            Err(Error::InvalidMatrixValue(_))
        ));

        let edge = WeightedEdge::new(UndirectedEdge::new(1, 2), 2.0).unwrap();
        check_weights_match(&[edge], &m).unwrap();

        let edge = WeightedEdge::new(UndirectedEdge::new(1, 2), 3.0).unwrap();
        let err = check_weights_match(&[edge], &m).unwrap_err();
        assert_eq!(
            err,
            Error::WeightMismatch {
                expected: 3.0,
                actual: 2.0
            }
        );
    }

    #[test]
    fn test_forest_and_tree() {
        let vertices = vec![v(1), v(2), v(3)];
        let path = [(&vertices[0], &vertices[1]), (&vertices[1], &vertices[2])];
        check_forest(&vertices, path).unwrap();
        check_tree(&vertices, path).unwrap();

        let partial = [(&vertices[0], &vertices[1])];
        check_forest(&vertices, partial).unwrap();
        assert!(matches!(
            check_tree(&vertices, partial),
            Err(Error::NotATree(_))
        ));

        let cycle = [
            (&vertices[0], &vertices[1]),
            (&vertices[1], &vertices[2]),
            (&vertices[2], &vertices[0]),
        ];
        assert!(matches!(
            check_forest(&vertices, cycle),
            Err(Error::CycleDetected(_))
        ));
        check_tree(&[], std::iter::empty()).unwrap();
    }

    #[test]
    fn test_forest_with_unknown_endpoint() {
        let (a, b) = (v(1), v(2));
        let err = check_forest(&[], [(&a, &b)]).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(_)));

        let vertices = vec![v(1)];
        let err = check_tree(&vertices, [(&vertices[0], &b)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Vertex);

        let mut sets = DisjointSets::new(vertices.iter());
        assert!(!sets.union(&vertices[0], &b));
        assert_eq!(sets.component_count(), 1);
    }
}
