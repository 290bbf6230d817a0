//! 测试辅助工具
//!
//! 提供集成测试共用的收集器、期望值构造和日志初始化

#![allow(dead_code)]

use xrange_api::{BigInt, Number, RangeSequence};

/// 单个序列最多产出的值数量，超过即视为死循环
pub const INF_LOOP_COUNT: usize = 1000;

/// 收集序列的全部值，超过 `INF_LOOP_COUNT` 时 panic
///
/// # Example
/// ```ignore
/// let values = collect_guarded(range(3).unwrap());
/// assert_eq!(values, fixed(&[0.0, 1.0, 2.0]));
/// ```
pub fn collect_guarded(seq: RangeSequence) -> Vec<Number> {
    let mut values = Vec::new();
    for value in seq {
        values.push(value);
        if values.len() > INF_LOOP_COUNT {
            panic!("range produced more than {} values", INF_LOOP_COUNT);
        }
    }
    values
}

/// 定宽期望值
pub fn fixed(values: &[f64]) -> Vec<Number> {
    values.iter().copied().map(Number::Fixed).collect()
}

/// 大整数期望值（十进制字符串）
pub fn arbitrary(values: &[&str]) -> Vec<Number> {
    values
        .iter()
        .map(|text| Number::Arbitrary(text.parse::<BigInt>().unwrap()))
        .collect()
}

/// 初始化测试日志
///
/// 默认输出 `xrange` 下所有目标，可用 `RUST_LOG` 覆盖；重复调用无副作用。
pub fn init_test_logger() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xrange=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
