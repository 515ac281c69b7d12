//! 广度优先距离与连通性

use crate::error::Result;
use crate::graph::legality::DisjointSets;
use crate::graph::{EdgeLike, Graphlike, Vertex, VertexPair};
use indexmap::IndexMap;
use tracing::trace;

/// 顶点 -> 距离；`None` 表示从源点不可达
pub type Distances = IndexMap<Vertex, Option<usize>>;

/// 按层扩展的广度优先距离
///
/// 结果包含所有顶点：源点为 0，第 k 层的顶点为 k，不可达的顶点为 `None`。
/// 有向图沿出边方向扩展。
pub fn breadth_first<G: Graphlike>(graph: &G, source: &Vertex) -> Result<Distances> {
    graph.require_vertex(source)?;

    let mut distances: Distances = graph.vertices().iter().map(|v| (v.clone(), None)).collect();
    distances.insert(source.clone(), Some(0));

    let mut frontier = vec![source.clone()];
    let mut depth = 0;
    while !frontier.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for u in &frontier {
            for w in graph.adjacent(u)? {
                if let Some(slot) = distances.get_mut(&w) {
                    if slot.is_none() {
                        *slot = Some(depth);
                        next.push(w);
                    }
                }
            }
        }
        trace!(depth, frontier = next.len(), "广度优先扩展");
        frontier = next;
    }

    Ok(distances)
}

/// 是否连通
///
/// 不区分边的方向（有向图即弱连通）；空图视为连通。
pub fn is_connected<G: Graphlike>(graph: &G) -> bool {
    component_count(graph) <= 1
}

/// 连通分量数量（不区分边的方向）
pub fn component_count<G: Graphlike>(graph: &G) -> usize {
    let edges = graph.edges();
    let mut sets = DisjointSets::new(graph.vertices().iter());
    for edge in &edges {
        let (a, b) = edge.pair().endpoints();
        sets.union(a, b);
    }
    sets.component_count()
}
