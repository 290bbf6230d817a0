//! 错误类型 (Core 层)
//!
//! 所有错误都在构造序列时同步返回，不会在产出过程中出现。

use thiserror::Error;

/// Core 层结果类型
pub type Result<T> = std::result::Result<T, RangeError>;

/// 错误类别
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 参数本身无效（非数字、零步长、参数个数错误）
    InvalidArgument,
    /// 参数合法但无法得到有限、精确的序列
    Range,
}

/// 区间构造错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// 强制转换后不是数字
    #[error("range() arguments must be numbers")]
    NotANumber,

    /// 步长为零（显式给出或由 sign(stop) 推断）
    #[error("range() argument 3 must be not zero")]
    ZeroStep,

    /// 位置参数个数不在 1..=3
    #[error("range() takes 1 to 3 arguments but {given} were given")]
    Arity { given: usize },

    /// 边界为无穷
    #[error("range() bounds must be finite, got {value}")]
    Unbounded { value: f64 },

    /// 提升为大整数时遇到小数
    #[error("range() argument {value} cannot be converted to an integer")]
    NonIntegral { value: f64 },

    /// 浮点步长过小，运行值不再前进
    #[error("range() step {step} is too small to advance past {at}")]
    Stalled { step: f64, at: f64 },
}

impl RangeError {
    /// 获取错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeError::NotANumber | RangeError::ZeroStep | RangeError::Arity { .. } => {
                ErrorKind::InvalidArgument
            }
            RangeError::Unbounded { .. }
            | RangeError::NonIntegral { .. }
            | RangeError::Stalled { .. } => ErrorKind::Range,
        }
    }

    /// 错误名称（可用于程序化处理）
    pub fn name(&self) -> &'static str {
        match self {
            RangeError::NotANumber => "NotANumber",
            RangeError::ZeroStep => "ZeroStep",
            RangeError::Arity { .. } => "Arity",
            RangeError::Unbounded { .. } => "Unbounded",
            RangeError::NonIntegral { .. } => "NonIntegral",
            RangeError::Stalled { .. } => "Stalled",
        }
    }
}
