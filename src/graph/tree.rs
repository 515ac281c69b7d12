//! 树
//!
//! 在无向图之上增加无环约束：每次添加边都会检查是否成环，整体安装的
//! 三元组也必须无环。构造过程中的树可以暂时是森林，
//! [`Tree::is_tree`] 报告当前是否已经连通。

use super::edge::UndirectedEdge;
use super::graph::Graph;
use super::graphlike::{GraphParts, Graphlike};
use super::legality::{check_forest, check_tree, DisjointSets};
use super::matrix::AdjacencyMatrix;
use super::vertex::Vertex;
use super::VertexPair;
use crate::algorithm::{self, Distances, ShortestPaths};
use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::warn;

/// 树（构造过程中为森林）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    graph: Graph,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// 将无向图转换为树；图必须无环且连通
    pub fn try_from_graph(graph: Graph) -> Result<Self> {
        let vertices: Vec<Vertex> = graph.vertices().iter().cloned().collect();
        check_tree(&vertices, graph.store().pairs().map(|p| p.endpoints()))?;
        Ok(Self { graph })
    }

    /// 是否连通，即当前森林是否已是一棵树
    pub fn is_tree(&self) -> bool {
        self.graph.is_connected()
    }

    /// 作为无向图访问
    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn degree(&self, vertex: &Vertex) -> Result<usize> {
        self.graph.degree(vertex)
    }

    /// 叶子：度数为 1 的顶点
    pub fn leaves(&self) -> IndexSet<Vertex> {
        self.graph
            .vertices()
            .iter()
            .filter(|v| matches!(self.graph.degree(v), Ok(1)))
            .cloned()
            .collect()
    }

    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    /// 从 source 出发的广度优先距离
    pub fn breadth_first(&self, source: &Vertex) -> Result<Distances> {
        algorithm::breadth_first(self, source)
    }

    /// Dijkstra 单源最短路径
    pub fn dijkstra_distance(&self, source: &Vertex) -> Result<ShortestPaths> {
        algorithm::dijkstra_distance(self, source)
    }
}

impl Graphlike for Tree {
    type Edge = UndirectedEdge;

    /// 无向图的合法性加上无环
    fn is_legal(
        vertices: &[Vertex],
        edges: &[UndirectedEdge],
        matrix: &AdjacencyMatrix,
    ) -> Result<()> {
        Graph::is_legal(vertices, edges, matrix)?;
        check_forest(vertices, edges.iter().map(|e| e.endpoints()))
    }

    fn edge_form(a: impl Into<Vertex>, b: impl Into<Vertex>) -> UndirectedEdge {
        UndirectedEdge::new(a, b)
    }

    fn from_parts(parts: GraphParts<UndirectedEdge>) -> Result<Self> {
        if let Err(e) = Self::is_legal(&parts.vertices, &parts.edges, &parts.adjacency_matrix) {
            warn!(error = %e, "拒绝非法的树三元组");
            return Err(e);
        }
        Ok(Self {
            graph: Graph::from_parts(parts)?,
        })
    }

    fn vertices(&self) -> &IndexSet<Vertex> {
        self.graph.vertices()
    }

    fn edges(&self) -> Vec<UndirectedEdge> {
        self.graph.edges()
    }

    fn adjacency_matrix(&self) -> &AdjacencyMatrix {
        self.graph.adjacency_matrix()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn add_vertices<I, V>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        self.graph.add_vertices(vertices);
    }

    /// 添加边；任意一条边会形成环时整批拒绝
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = UndirectedEdge>,
    {
        let store = self.graph.store();
        let staged = store.stage_edges(edges.into_iter().map(|e| (e, 1.0)))?;

        {
            let mut sets = DisjointSets::new(store.vertices().iter());
            for pair in store.pairs() {
                let (a, b) = pair.endpoints();
                sets.union(a, b);
            }
            let mut seen = HashSet::new();
            for (pair, _) in &staged {
                // 已有的边和批内重复的边不改变连通关系
                if store.contains_pair(pair) || !seen.insert(pair) {
                    continue;
                }
                let (a, b) = pair.endpoints();
                if !sets.union(a, b) {
                    warn!(edge = %pair, "拒绝添加边: 形成环");
                    return Err(Error::CycleDetected(pair.to_string()));
                }
            }
        }

        self.graph.store_mut().commit_edges(staged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn v(n: i64) -> Vertex {
        Vertex::from(n)
    }

    fn create_test_tree() -> Tree {
        //     1
        //    / \
        //   2   3
        //  / \
        // 4   5
        let mut t = Tree::new();
        t.add_vertices(1..=5);
        t.add_edges([
            Tree::edge_form(1, 2),
            Tree::edge_form(1, 3),
            Tree::edge_form(2, 4),
            Tree::edge_form(2, 5),
        ])
        .unwrap();
        t
    }

    #[test]
    fn test_tree_basic() {
        let t = create_test_tree();
        assert!(t.is_tree());
        assert_eq!(t.edge_count(), t.vertex_count() - 1);
        t.validate().unwrap();

        let leaves: Vec<Vertex> = t.leaves().into_iter().collect();
        assert_eq!(leaves, vec![v(3), v(4), v(5)]);
        assert_eq!(t.degree(&v(2)).unwrap(), 3);
    }

    #[test]
    fn test_cycle_rejected_atomically() {
        let mut t = create_test_tree();
        let before = t.clone();

        let err = t.add_edge(Tree::edge_form(4, 5)).unwrap_err();
        assert!(matches!(err, Error::CycleDetected(_)));
        assert_eq!(err.kind(), ErrorKind::Edge);
        assert_eq!(t, before);

        // 批内成环同样整批拒绝
        t.add_vertices([6, 7]);
        let before = t.clone();
        let err = t
            .add_edges([
                Tree::edge_form(6, 7),
                Tree::edge_form(3, 6),
                Tree::edge_form(7, 1),
            ])
            .unwrap_err();
        assert!(matches!(err, Error::CycleDetected(_)));
        assert_eq!(t, before);
    }

    #[test]
    fn test_readding_existing_edge() {
        let mut t = Tree::new();
        t.add_vertices([1, 2, 3]);
        t.add_edge(Tree::edge_form(1, 2)).unwrap();

        t.add_edge(Tree::edge_form(2, 1)).unwrap();
        assert_eq!(t.edge_count(), 1);

        t.add_edges([
            Tree::edge_form(2, 3),
            Tree::edge_form(3, 2),
            Tree::edge_form(1, 2),
        ])
        .unwrap();
        assert_eq!(t.edge_count(), 2);
        assert!(t.is_tree());
        t.validate().unwrap();
    }

    #[test]
    fn test_growing_forest() {
        let mut t = Tree::new();
        t.add_vertices(1..=4);
        t.add_edge(Tree::edge_form(1, 2)).unwrap();
        t.add_edge(Tree::edge_form(3, 4)).unwrap();
        assert!(!t.is_tree());

        t.add_edge(Tree::edge_form(2, 3)).unwrap();
        assert!(t.is_tree());
        assert!(Tree::new().is_tree());
    }

    #[test]
    fn test_breadth_first_depths() {
        let t = create_test_tree();
        let d = t.breadth_first(&v(1)).unwrap();
        assert_eq!(d[&v(1)], Some(0));
        assert_eq!(d[&v(3)], Some(1));
        assert_eq!(d[&v(5)], Some(2));

        let paths = t.dijkstra_distance(&v(4)).unwrap();
        assert_eq!(paths[&v(3)].path, vec![v(4), v(2), v(1)]);
    }

    #[test]
    fn test_try_from_graph() {
        let mut g = Graph::new();
        g.add_vertices(1..=3);
        g.add_edge(Graph::edge_form(1, 2)).unwrap();
        assert!(matches!(
            Tree::try_from_graph(g.clone()),
            Err(Error::NotATree(_))
        ));

        g.add_edge(Graph::edge_form(2, 3)).unwrap();
        let t = Tree::try_from_graph(g.clone()).unwrap();
        assert_eq!(t.as_graph(), &g);

        g.add_edge(Graph::edge_form(1, 3)).unwrap();
        assert!(matches!(
            Tree::try_from_graph(g),
            Err(Error::NotATree(_))
        ));
    }

    #[test]
    fn test_from_parts_rejects_cycle() {
        let mut g = Graph::new();
        g.add_vertices(1..=3);
        g.add_edges([
            Graph::edge_form(1, 2),
            Graph::edge_form(2, 3),
            Graph::edge_form(3, 1),
        ])
        .unwrap();
        let err = Tree::from_parts(g.to_parts()).unwrap_err();
        assert!(matches!(err, Error::CycleDetected(_)));

        let t = create_test_tree();
        let restored = Tree::from_parts(t.to_parts()).unwrap();
        assert_eq!(restored.into_graph(), t.into_graph());
    }
}
