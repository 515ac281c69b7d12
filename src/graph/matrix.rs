//! 邻接矩阵
//!
//! 以顶点对为键的扁平映射。有向矩阵的键是有序对；无向矩阵的键在写入
//! 和读取时都规范化为 (较小顶点, 较大顶点)，因此天然对称。
//! 取值为 `None` 表示无边；`Some(0.0)` 同样视为无边。

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 判断矩阵取值是否表示一条边
pub fn is_edge_value(value: Option<f64>) -> bool {
    matches!(value, Some(w) if w != 0.0)
}

/// 矩阵条目（序列化形式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub row: Vertex,
    pub col: Vertex,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatrixRepr {
    directed: bool,
    entries: Vec<MatrixEntry>,
}

/// 邻接矩阵
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct AdjacencyMatrix {
    directed: bool,
    entries: IndexMap<(Vertex, Vertex), Option<f64>>,
}

impl AdjacencyMatrix {
    /// 创建空矩阵
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            entries: IndexMap::new(),
        }
    }

    /// 创建空的有向矩阵
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建空的无向矩阵
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 由条目列表构造矩阵
    ///
    /// 无向矩阵中 (u, v) 与 (v, u) 同时出现且取值不同时返回
    /// [`Error::AsymmetricMatrix`]；有向矩阵中同一键重复且取值不同时返回
    /// [`Error::InvalidMatrixValue`]。
    pub fn from_entries<I>(directed: bool, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = MatrixEntry>,
    {
        let mut matrix = Self::new(directed);
        for MatrixEntry { row, col, value } in entries {
            let key = matrix.key(&row, &col);
            if let Some(existing) = matrix.entries.get(&key) {
                if *existing != value {
                    let detail = format!("({}, {}): {:?} != {:?}", row, col, existing, value);
                    return Err(if directed {
                        Error::InvalidMatrixValue(format!("重复条目 {}", detail))
                    } else {
                        Error::AsymmetricMatrix(detail)
                    });
                }
                continue;
            }
            matrix.entries.insert(key, value);
        }
        Ok(matrix)
    }

    /// 是否为有向矩阵
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn key(&self, u: &Vertex, v: &Vertex) -> (Vertex, Vertex) {
        if !self.directed && v < u {
            (v.clone(), u.clone())
        } else {
            (u.clone(), v.clone())
        }
    }

    /// 获取条目：外层 `None` 表示矩阵中没有该键
    pub fn entry(&self, u: &Vertex, v: &Vertex) -> Option<Option<f64>> {
        self.entries.get(&self.key(u, v)).copied()
    }

    /// 是否包含 (u, v) 条目
    pub fn contains(&self, u: &Vertex, v: &Vertex) -> bool {
        self.entries.contains_key(&self.key(u, v))
    }

    /// 获取 (u, v) 处的边值；无条目或无边时返回 `None`
    pub fn weight(&self, u: &Vertex, v: &Vertex) -> Option<f64> {
        self.entry(u, v).flatten().filter(|w| *w != 0.0)
    }

    /// 写入 (u, v) 条目，无向矩阵同时代表 (v, u)
    pub fn set(&mut self, u: &Vertex, v: &Vertex, value: Option<f64>) {
        let key = self.key(u, v);
        self.entries.insert(key, value);
    }

    /// 为新顶点扩展行和列，新条目初始化为无边
    pub fn extend_with_vertices<'a, I>(&mut self, all_vertices: I, new_vertices: &[Vertex])
    where
        I: IntoIterator<Item = &'a Vertex>,
    {
        for u in all_vertices {
            for v in new_vertices {
                if u == v {
                    continue;
                }
                let forward = self.key(u, v);
                self.entries.entry(forward).or_insert(None);
                if self.directed {
                    self.entries.entry((v.clone(), u.clone())).or_insert(None);
                }
            }
        }
    }

    /// 遍历所有条目
    pub fn iter(&self) -> impl Iterator<Item = (&Vertex, &Vertex, Option<f64>)> + '_ {
        self.entries.iter().map(|((u, v), value)| (u, v, *value))
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<MatrixRepr> for AdjacencyMatrix {
    type Error = Error;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::from_entries(repr.directed, repr.entries)
    }
}

impl From<AdjacencyMatrix> for MatrixRepr {
    fn from(matrix: AdjacencyMatrix) -> Self {
        MatrixRepr {
            directed: matrix.directed,
            entries: matrix
                .entries
                .into_iter()
                .map(|((row, col), value)| MatrixEntry { row, col, value })
                .collect(),
        }
    }
}
