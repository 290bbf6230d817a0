//! 原始调用参数
//!
//! 参数可以是定宽数字、任意精度整数或数字字符串，
//! 在规范化阶段统一转换到同一个数值域。

use crate::coerce;
use crate::error::Result;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::Deserialize;
use xrange_config::MAX_SAFE_INTEGER;

/// 单个原始参数
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "JsonArg")]
pub enum Arg {
    /// 定宽数字
    Fixed(f64),
    /// 任意精度整数
    Arbitrary(BigInt),
    /// 待强制转换的字符串
    Text(String),
}

impl Arg {
    /// 是否已经是任意精度整数
    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Arg::Arbitrary(_))
    }

    /// 强制转换为定宽数字（可能为 NaN 或无穷）
    pub fn to_fixed(&self) -> f64 {
        match self {
            Arg::Fixed(value) => *value,
            Arg::Arbitrary(value) => value.to_f64().unwrap_or(f64::NAN),
            Arg::Text(text) => coerce::parse_number(text),
        }
    }

    /// 精确转换为任意精度整数
    ///
    /// 字符串优先按整数字面量精确解析，否则退回到定宽数值再转换。
    pub fn to_arbitrary(&self) -> Result<BigInt> {
        match self {
            Arg::Fixed(value) => coerce::float_to_integer(*value),
            Arg::Arbitrary(value) => Ok(value.clone()),
            Arg::Text(text) => match coerce::parse_integer(text) {
                Some(value) => Ok(value),
                None => coerce::float_to_integer(coerce::parse_number(text)),
            },
        }
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Fixed(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Fixed(f64::from(value))
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Fixed(f64::from(value))
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Fixed(f64::from(value))
    }
}

// 64 位整数超出安全范围时保留精确值，不经过 f64 舍入
impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        if value.unsigned_abs() <= MAX_SAFE_INTEGER {
            Arg::Fixed(value as f64)
        } else {
            Arg::Arbitrary(BigInt::from(value))
        }
    }
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        if value <= MAX_SAFE_INTEGER {
            Arg::Fixed(value as f64)
        } else {
            Arg::Arbitrary(BigInt::from(value))
        }
    }
}

impl From<BigInt> for Arg {
    fn from(value: BigInt) -> Self {
        Arg::Arbitrary(value)
    }
}

impl From<&BigInt> for Arg {
    fn from(value: &BigInt) -> Self {
        Arg::Arbitrary(value.clone())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

/// JSON 形式的参数
///
/// 整数优先匹配，避免超出安全范围的整数被 f64 舍入。
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Flag(bool),
    Null,
}

impl From<JsonArg> for Arg {
    fn from(value: JsonArg) -> Self {
        match value {
            JsonArg::Int(value) => Arg::from(value),
            JsonArg::UInt(value) => Arg::from(value),
            JsonArg::Float(value) => Arg::Fixed(value),
            JsonArg::Text(text) => Arg::Text(text),
            JsonArg::Flag(flag) => Arg::Fixed(if flag { 1.0 } else { 0.0 }),
            JsonArg::Null => Arg::Fixed(0.0),
        }
    }
}
