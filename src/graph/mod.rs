//! 图核心模块
//!
//! 定义顶点、边、邻接矩阵和各种图类型

mod digraph;
mod edge;
mod graph;
mod graphlike;
pub(crate) mod legality;
mod matrix;
pub(crate) mod store;
mod tree;
mod vertex;
mod weighted;

pub use digraph::Digraph;
pub use edge::{
    check_weight, DirectedEdge, EdgeLike, UndirectedEdge, VertexPair, WeightedDirectedEdge,
    WeightedEdge, WeightedUndirectedEdge,
};
pub use graph::Graph;
pub use graphlike::{GraphParts, Graphlike};
pub use legality::{
    check_base, check_forest, check_loop_free, check_tree, check_unit_entries,
    check_weights_match,
};
pub use matrix::{is_edge_value, AdjacencyMatrix, MatrixEntry};
pub use tree::Tree;
pub use vertex::Vertex;
pub use weighted::{WeightedDigraph, WeightedGraph};
