//! 顶点定义
//!
//! 顶点只是一个不可变的标签：整数、文本或字节串

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点标签
///
/// 相等、哈希与排序均按值进行。排序用于规范化无向边的端点顺序。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vertex {
    /// 整数标签
    Int(i64),
    /// 文本标签
    Text(String),
    /// 字节串标签
    Bytes(Vec<u8>),
}

impl Vertex {
    /// 获取整数标签
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Vertex::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// 获取文本标签
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Vertex::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// 获取字节串标签
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Vertex::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Int(n) => write!(f, "{}", n),
            Vertex::Text(s) => write!(f, "{}", s),
            Vertex::Bytes(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Vertex {
    fn from(n: i64) -> Self {
        Vertex::Int(n)
    }
}

impl From<i32> for Vertex {
    fn from(n: i32) -> Self {
        Vertex::Int(n as i64)
    }
}

impl From<u32> for Vertex {
    fn from(n: u32) -> Self {
        Vertex::Int(n as i64)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Vertex::Text(s.to_string())
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Vertex::Text(s)
    }
}

impl From<Vec<u8>> for Vertex {
    fn from(bytes: Vec<u8>) -> Self {
        Vertex::Bytes(bytes)
    }
}

impl From<&[u8]> for Vertex {
    fn from(bytes: &[u8]) -> Self {
        Vertex::Bytes(bytes.to_vec())
    }
}

/// 从任意 JSON 值转换为顶点标签
///
/// 只接受整数、字符串和由 0..=255 组成的数组，其余一律返回
/// [`Error::InvalidVertex`]。
impl TryFrom<serde_json::Value> for Vertex {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Number(ref n) => n
                .as_i64()
                .map(Vertex::Int)
                .ok_or_else(|| Error::InvalidVertex(format!("非整数数值 {}", n))),
            Value::String(s) => Ok(Vertex::Text(s)),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| Error::InvalidVertex(format!("字节串元素越界: {}", item)))
                })
                .collect::<Result<Vec<u8>>>()
                .map(Vertex::Bytes),
            other => Err(Error::InvalidVertex(format!("不支持的标签类型: {}", other))),
        }
    }
}
