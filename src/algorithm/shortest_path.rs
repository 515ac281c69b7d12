//! Dijkstra 单源最短路径
//!
//! 适用于所有图类型：无权图每条边权重为 1，带权图使用矩阵中的权重。
//! 无向图的边可以双向通行。

use crate::error::{Error, Result};
use crate::graph::{Graphlike, Vertex};
use indexmap::IndexMap;
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use tracing::trace;

/// 到某个顶点的最短路径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// 最短距离；不可达时为正无穷
    pub distance: f64,
    /// 从源点出发的前驱序列，不含目标顶点本身
    pub path: Vec<Vertex>,
}

impl ShortestPath {
    fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// 是否可达
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// 顶点 -> 最短路径
pub type ShortestPaths = IndexMap<Vertex, ShortestPath>;

/// 优先队列中的距离标签
#[derive(Debug, Clone, Copy, PartialEq)]
struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 从 source 出发计算到所有顶点的最短距离和路径
///
/// source 不是图中顶点时返回 [`Error::VertexNotFound`]；
/// 图中存在负权边时返回 [`Error::NegativeWeight`]。
pub fn dijkstra_distance<G: Graphlike>(graph: &G, source: &Vertex) -> Result<ShortestPaths> {
    graph.require_vertex(source)?;
    let matrix = graph.adjacency_matrix();
    if let Some((u, v, w)) = matrix
        .iter()
        .find_map(|(u, v, value)| value.filter(|w| *w < 0.0).map(|w| (u, v, w)))
    {
        return Err(Error::NegativeWeight(format!("({}, {}) = {}", u, v, w)));
    }

    let mut result: ShortestPaths = graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), ShortestPath::unreached()))
        .collect();
    let mut queue = PriorityQueue::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        let label = if vertex == source { 0.0 } else { f64::INFINITY };
        if let Some(entry) = result.get_mut(vertex) {
            entry.distance = label;
        }
        queue.push(vertex.clone(), Reverse(Distance(label)));
    }

    while let Some((u, Reverse(Distance(du)))) = queue.pop() {
        if du.is_infinite() {
            // 剩余顶点都不可达
            break;
        }
        trace!(vertex = %u, distance = du, remaining = queue.len(), "确定最短距离");

        let mut prefix = result.get(&u).map(|p| p.path.clone()).unwrap_or_default();
        prefix.push(u.clone());

        for w in graph.vertices() {
            if w == &u || queue.get_priority(w).is_none() {
                continue;
            }
            let Some(weight) = matrix.weight(&u, w) else {
                continue;
            };
            let alt = du + weight;
            if let Some(entry) = result.get_mut(w) {
                if alt < entry.distance {
                    entry.distance = alt;
                    entry.path = prefix.clone();
                    queue.change_priority(w, Reverse(Distance(alt)));
                }
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        Digraph, Graph, UndirectedEdge, WeightedDigraph, WeightedEdge, WeightedGraph,
    };

    fn v(n: i64) -> Vertex {
        Vertex::from(n)
    }

    #[test]
    fn test_dijkstra_unweighted_digraph() {
        // 1 -> 2 -> 3, 1 -> 3, 4 孤立
        let mut g = Digraph::new();
        g.add_vertices(1..=4);
        g.add_edges([
            Digraph::edge_form(1, 2),
            Digraph::edge_form(2, 3),
            Digraph::edge_form(1, 3),
        ])
        .unwrap();

        let paths = dijkstra_distance(&g, &v(1)).unwrap();
        assert_eq!(paths[&v(1)].distance, 0.0);
        assert!(paths[&v(1)].path.is_empty());
        assert_eq!(paths[&v(2)].distance, 1.0);
        assert_eq!(paths[&v(2)].path, vec![v(1)]);
        assert_eq!(paths[&v(3)].distance, 1.0);
        assert!(!paths[&v(4)].is_reachable());
        assert!(paths[&v(4)].path.is_empty());

        // 反方向不可达
        let back = dijkstra_distance(&g, &v(3)).unwrap();
        assert!(!back[&v(1)].is_reachable());
    }

    #[test]
    fn test_dijkstra_weighted_prefers_light_path() {
        // 1 -(10)-> 3, 1 -(2)-> 2 -(3)-> 3
        let mut g = WeightedDigraph::new();
        g.add_vertices(1..=3);
        g.add_edges([
            WeightedDigraph::edge_form_weighted(1, 3, 10.0).unwrap(),
            WeightedDigraph::edge_form_weighted(1, 2, 2.0).unwrap(),
            WeightedDigraph::edge_form_weighted(2, 3, 3.0).unwrap(),
        ])
        .unwrap();

        let paths = dijkstra_distance(&g, &v(1)).unwrap();
        assert_eq!(paths[&v(3)].distance, 5.0);
        assert_eq!(paths[&v(3)].path, vec![v(1), v(2)]);
    }

    #[test]
    fn test_dijkstra_undirected_edges_work_both_ways() {
        let mut g = Graph::new();
        g.add_vertices(1..=4);
        g.add_edges([
            Graph::edge_form(2, 1),
            Graph::edge_form(3, 2),
            Graph::edge_form(4, 3),
        ])
        .unwrap();

        let paths = dijkstra_distance(&g, &v(4)).unwrap();
        assert_eq!(paths[&v(1)].distance, 3.0);
        assert_eq!(paths[&v(1)].path, vec![v(4), v(3), v(2)]);
    }

    #[test]
    fn test_dijkstra_rejects_unknown_source_and_negative_weight() {
        let g = Graph::new();
        assert!(matches!(
            dijkstra_distance(&g, &v(1)),
            Err(Error::VertexNotFound(_))
        ));

        let mut g = WeightedGraph::new();
        g.add_vertices([1, 2]);
        g.add_edge(WeightedEdge::new(UndirectedEdge::new(1, 2), -1.0).unwrap())
            .unwrap();
        assert!(matches!(
            dijkstra_distance(&g, &v(1)),
            Err(Error::NegativeWeight(_))
        ));
    }
}
