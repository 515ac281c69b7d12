//! graph-theory - 图论对象与连通性算法
//!
//! 以 {顶点集合, 边集合, 邻接矩阵} 三元组表示图，支持：
//! - 无向图、有向图及其带权变体，以及树
//! - 每种图类型各自的合法性检查
//! - 广度优先距离、Dijkstra 最短路径
//! - 完全图构造与图序列判定

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{
    breadth_first, complete_graph, dijkstra_distance, is_complete_graph, is_connected,
    is_graphical_sequence,
};
pub use error::{Error, ErrorKind, Result};
pub use graph::{
    AdjacencyMatrix, Digraph, DirectedEdge, Graph, GraphParts, Graphlike, Tree, UndirectedEdge,
    Vertex, WeightedDigraph, WeightedEdge, WeightedGraph,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
