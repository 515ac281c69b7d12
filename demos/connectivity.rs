//! 连通性示例
//!
//! 运行: `RUST_LOG=debug cargo run --example connectivity`

use graph_theory::algorithm::{component_count, satisfies_erdos_gallai};
use graph_theory::{
    complete_graph, is_complete_graph, is_graphical_sequence, Digraph, Graph, Graphlike, Tree,
    Vertex, WeightedGraph,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    println!("graph-theory {}", graph_theory::VERSION);
    println!("=====================");

    // 无向图
    let mut g = Graph::new();
    g.add_vertices(["a", "b", "c", "d", "e"]);
    g.add_edges([
        Graph::edge_form("a", "b"),
        Graph::edge_form("b", "c"),
        Graph::edge_form("c", "d"),
        Graph::edge_form("a", "c"),
    ])?;

    let source = Vertex::from("a");
    println!("\n无向图: {} 个顶点, {} 条边", g.vertex_count(), g.edge_count());
    println!("  度数序列: {:?}", g.degree_sequence());
    println!("  连通: {} ({} 个分量)", g.is_connected(), component_count(&g));
    for (vertex, distance) in g.breadth_first(&source)? {
        match distance {
            Some(d) => println!("  {} -> {}: {}", source, vertex, d),
            None => println!("  {} -> {}: 不可达", source, vertex),
        }
    }

    // 非法边被整体拒绝
    if let Err(e) = g.add_edge(Graph::edge_form("a", "z")) {
        println!("  添加 {{a, z}} 失败 ({:?}): {}", e.kind(), e);
    }

    // 带权无向图
    let mut roads = WeightedGraph::new();
    roads.add_vertices(1..=4);
    roads.add_edges([
        WeightedGraph::edge_form_weighted(1, 2, 7.0)?,
        WeightedGraph::edge_form_weighted(1, 3, 2.0)?,
        WeightedGraph::edge_form_weighted(3, 2, 3.0)?,
        WeightedGraph::edge_form_weighted(2, 4, 1.5)?,
    ])?;
    println!("\n带权图最短路径 (起点 1):");
    for (vertex, shortest) in roads.dijkstra_distance(&Vertex::from(1))? {
        println!("  {}: 距离 {}, 前驱 {:?}", vertex, shortest.distance, shortest.path);
    }

    // 有向图
    let mut d = Digraph::new();
    d.add_vertices(1..=3);
    d.add_edges([Digraph::edge_form(1, 2), Digraph::edge_form(2, 3)])?;
    println!(
        "\n有向图: 入度之和 {}, 出度之和 {}",
        d.sum_of_degrees(),
        d.sum_of_out_degrees()
    );

    // 树
    let mut t = Tree::new();
    t.add_vertices(1..=4);
    t.add_edges([Tree::edge_form(1, 2), Tree::edge_form(1, 3)])?;
    println!("\n树: 已连通 = {}", t.is_tree());
    t.add_edge(Tree::edge_form(3, 4))?;
    println!("  添加 {{3, 4}} 后已连通 = {}, 叶子 {:?}", t.is_tree(), t.leaves());
    if let Err(e) = t.add_edge(Tree::edge_form(2, 4)) {
        println!("  添加 {{2, 4}} 失败: {}", e);
    }

    // 完全图与图序列
    let k5 = complete_graph(5);
    println!("\nK5: {} 条边, 完全图 = {}", k5.edge_count(), is_complete_graph(&k5));
    for seq in [vec![3, 3, 3, 3], vec![4, 4, 4, 4, 4], vec![5, 1, 1, 1, 1], vec![-1, 2, 2]] {
        println!(
            "  {:?}: Havel-Hakimi = {}, Erdős-Gallai = {}",
            seq,
            is_graphical_sequence(&seq),
            satisfies_erdos_gallai(&seq)
        );
    }

    Ok(())
}
