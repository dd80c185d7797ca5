//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::BookError;

/// 图书唯一标识
///
/// 规范类型为非负整数；边界处的字符串形式（如 `"3"`）通过 `FromStr` 归一化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 解析 URL 路径中的书号
    ///
    /// - 不是数字（含 NaN）: `Err(InvalidId)`
    /// - 是数字但不可能是书号（负数、小数、超出范围）: `Ok(None)`
    /// - 整数值（如 `"3"`、`"3.0"`）: `Ok(Some(id))`
    pub fn from_path(raw: &str) -> Result<Option<Self>, BookError> {
        if let Ok(id) = raw.parse::<Self>() {
            return Ok(Some(id));
        }

        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .ok_or_else(|| BookError::InvalidId(raw.to_string()))?;

        if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value < MAX_EXACT_ID {
            Ok(Some(Self(value as u64)))
        } else {
            Ok(None)
        }
    }
}

/// 2^53，超过后浮点数无法精确表示整数
const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

impl FromStr for BookId {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| BookError::InvalidId(s.to_string()))
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图书标题（去除首尾空白后不能为空）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(BookError::MissingTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
