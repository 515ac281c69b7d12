//! 完全图

use crate::graph::store::GraphStore;
use crate::graph::{Graph, Graphlike, UndirectedEdge, Vertex};
use tracing::debug;

/// 构造 n 阶完全图 K_n，顶点为整数 0..n
pub fn complete_graph(n: usize) -> Graph {
    let vertices: Vec<Vertex> = (0..n).map(|i| Vertex::Int(i as i64)).collect();

    let mut store = GraphStore::new();
    store.add_vertices(vertices.iter().cloned());
    let pairs = vertices
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            vertices[i + 1..]
                .iter()
                .map(move |b| (UndirectedEdge::new(a.clone(), b.clone()), 1.0))
        })
        .collect();
    store.commit_edges(pairs);

    debug!(order = n, "构造完全图");
    Graph::from_store(store)
}

/// 任意两个不同顶点之间都有边时返回 true
///
/// 只检查邻接矩阵，因此适用于所有图类型；有向图要求两个方向都有边。
pub fn is_complete_graph<G: Graphlike>(graph: &G) -> bool {
    let matrix = graph.adjacency_matrix();
    let vertices = graph.vertices();
    vertices.iter().all(|u| {
        vertices
            .iter()
            .all(|v| u == v || matrix.weight(u, v).is_some())
    })
}
