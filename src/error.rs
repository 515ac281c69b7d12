//! 错误类型定义
//!
//! 所有错误归为三类：顶点错误、边错误、邻接矩阵错误，见 [`ErrorKind`]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 错误大类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 顶点集合或顶点标签不合法
    Vertex,
    /// 边集合、边形式或权重不合法
    Edge,
    /// 邻接矩阵与顶点/边不一致
    Matrix,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ==================== 顶点错误 ====================
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点集合中存在重复顶点: {0}")]
    DuplicateVertex(String),

    #[error("无法转换为顶点标签: {0}")]
    InvalidVertex(String),

    // ==================== 边错误 ====================
    #[error("边集合中存在重复边: {0}")]
    DuplicateEdge(String),

    #[error("严格图中不允许自环: {0}")]
    SelfLoop(String),

    #[error("无效的边权重: {0}")]
    InvalidWeight(String),

    #[error("最短路径要求非负权重: {0}")]
    NegativeWeight(String),

    #[error("加入该边会形成环: {0}")]
    CycleDetected(String),

    #[error("不是一棵树: {0}")]
    NotATree(String),

    // ==================== 矩阵错误 ====================
    #[error("邻接矩阵缺少条目: {0}")]
    MissingMatrixEntry(String),

    #[error("邻接矩阵索引包含非顶点值: {0}")]
    NonVertexIndex(String),

    #[error("邻接矩阵在无边位置存在非零值: {0}")]
    NonEdgeValue(String),

    #[error("边未在邻接矩阵中表示: {0}")]
    EdgeNotRepresented(String),

    #[error("邻接矩阵取值非法: {0}")]
    InvalidMatrixValue(String),

    #[error("邻接矩阵取值与边权重不一致: 期望 {expected}, 实际 {actual}")]
    WeightMismatch { expected: f64, actual: f64 },

    #[error("邻接矩阵方向与图类型不符: {0}")]
    OrientationMismatch(String),

    #[error("无向图的邻接矩阵不对称: {0}")]
    AsymmetricMatrix(String),
}

impl Error {
    /// 获取错误大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VertexNotFound(_) | Error::DuplicateVertex(_) | Error::InvalidVertex(_) => {
                ErrorKind::Vertex
            }
            Error::DuplicateEdge(_)
            | Error::SelfLoop(_)
            | Error::InvalidWeight(_)
            | Error::NegativeWeight(_)
            | Error::CycleDetected(_)
            | Error::NotATree(_) => ErrorKind::Edge,
            Error::MissingMatrixEntry(_)
            | Error::NonVertexIndex(_)
            | Error::NonEdgeValue(_)
            | Error::EdgeNotRepresented(_)
            | Error::InvalidMatrixValue(_)
            | Error::WeightMismatch { .. }
            | Error::OrientationMismatch(_)
            | Error::AsymmetricMatrix(_) => ErrorKind::Matrix,
        }
    }
}
