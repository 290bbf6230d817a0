//! 数值域与输出值
//!
//! 一次调用产出的所有值都属于同一个数值域：
//! 要么全部是定宽浮点数，要么全部是任意精度整数。

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// 数值域
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// 定宽浮点数（安全整数范围 ±(2^53 - 1)）
    Fixed,
    /// 任意精度整数
    Arbitrary,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Fixed => "fixed",
            Domain::Arbitrary => "arbitrary",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 序列产出的数值
///
/// 序列化时定宽数字输出为 JSON 数字，大整数输出为十进制字符串（保证精确）。
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Fixed(f64),
    Arbitrary(#[serde(serialize_with = "serialize_integer")] BigInt),
}

fn serialize_integer<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Number {
    /// 所属数值域
    pub fn domain(&self) -> Domain {
        match self {
            Number::Fixed(_) => Domain::Fixed,
            Number::Arbitrary(_) => Domain::Arbitrary,
        }
    }

    /// 获取定宽数值（如果是）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Fixed(value) => Some(*value),
            Number::Arbitrary(_) => None,
        }
    }

    /// 获取大整数引用（如果是）
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Number::Fixed(_) => None,
            Number::Arbitrary(value) => Some(value),
        }
    }

    /// 取出大整数（如果是）
    pub fn into_bigint(self) -> Option<BigInt> {
        match self {
            Number::Fixed(_) => None,
            Number::Arbitrary(value) => Some(value),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Fixed(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Arbitrary(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Fixed(value) => write!(f, "{value}"),
            Number::Arbitrary(value) => write!(f, "{value}"),
        }
    }
}
