//! xrange Core - 区间序列核心（纯逻辑，无 IO）
//!
//! 包含参数强制转换、规范化、数值域选择和惰性序列产出。
//!
//! 配置通过参数显式传入，不使用全局状态。

pub mod arg;
pub mod coerce;
pub mod error;
pub mod normalize;
pub mod number;
pub mod sequence;

// Re-export common types
pub use arg::Arg;
pub use error::{ErrorKind, RangeError, Result};
pub use normalize::{normalize, Bounds, RangeRequest};
pub use number::{Domain, Number};
pub use sequence::{Progression, RangeSequence, SequenceState, Stride};

// Re-export config types from xrange-config
pub use xrange_config::{DomainConfig, Phase, MAX_SAFE_INTEGER};
