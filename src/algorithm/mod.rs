//! 图算法模块
//!
//! 包含广度优先距离、Dijkstra 最短路径、完全图构造和图序列判定

mod construction;
mod sequence;
mod shortest_path;
mod traversal;

pub use construction::{complete_graph, is_complete_graph};
pub use sequence::{is_graphical_sequence, satisfies_erdos_gallai};
pub use shortest_path::{dijkstra_distance, ShortestPath, ShortestPaths};
pub use traversal::{breadth_first, component_count, is_connected, Distances};
