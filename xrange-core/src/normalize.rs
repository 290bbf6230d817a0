//! 参数规范化
//!
//! 把 1~3 个原始参数解析为同一数值域内、已校验的 `(start, stop, step)` 三元组：
//!
//! | 调用形式                 | start | stop | step                    |
//! |--------------------------|-------|------|-------------------------|
//! | `(stop)`                 | 0     | stop | sign(stop)              |
//! | `(start, stop)`          | start | stop | -1 if stop<start else 1 |
//! | `(start, stop, step)`    | start | stop | step                    |
//!
//! 任一原始参数是大整数，或 start/stop 的绝对值超出安全整数范围时，
//! 三个值全部提升为任意精度整数；否则全部为定宽数字。

use crate::arg::Arg;
use crate::error::{RangeError, Result};
use crate::number::{Domain, Number};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use tracing::debug;
use xrange_config::{DomainConfig, Phase};

const TARGET: &str = Phase::Normalize.target();

/// 原始调用参数
///
/// `start` 缺省为 0；`step` 缺省时按是否给出 `start` 推断方向。
#[derive(Clone, Debug, PartialEq)]
pub struct RangeRequest {
    pub start: Option<Arg>,
    pub stop: Arg,
    pub step: Option<Arg>,
}

impl RangeRequest {
    /// 单参数形式：`(stop)`
    pub fn stop(stop: impl Into<Arg>) -> Self {
        Self {
            start: None,
            stop: stop.into(),
            step: None,
        }
    }

    /// 双参数形式：`(start, stop)`
    pub fn between(start: impl Into<Arg>, stop: impl Into<Arg>) -> Self {
        Self {
            start: Some(start.into()),
            stop: stop.into(),
            step: None,
        }
    }

    /// 三参数形式：`(start, stop, step)`
    pub fn stepped(start: impl Into<Arg>, stop: impl Into<Arg>, step: impl Into<Arg>) -> Self {
        Self {
            start: Some(start.into()),
            stop: stop.into(),
            step: Some(step.into()),
        }
    }

    /// 位置参数形式，参数个数必须在 1..=3
    pub fn from_args(args: &[Arg]) -> Result<Self> {
        match args {
            [stop] => Ok(Self::stop(stop.clone())),
            [start, stop] => Ok(Self::between(start.clone(), stop.clone())),
            [start, stop, step] => Ok(Self::stepped(start.clone(), stop.clone(), step.clone())),
            _ => Err(RangeError::Arity { given: args.len() }),
        }
    }

    pub fn with_start(mut self, start: impl Into<Arg>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_step(mut self, step: impl Into<Arg>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// 遍历所有显式给出的参数
    fn args(&self) -> impl Iterator<Item = &Arg> {
        self.start
            .iter()
            .chain(std::iter::once(&self.stop))
            .chain(self.step.iter())
    }
}

/// 规范化后的三元组，三个值总在同一个数值域内
#[derive(Clone, Debug, PartialEq)]
pub enum Bounds {
    Fixed { start: f64, stop: f64, step: f64 },
    Arbitrary {
        start: BigInt,
        stop: BigInt,
        step: BigInt,
    },
}

impl Bounds {
    pub fn domain(&self) -> Domain {
        match self {
            Bounds::Fixed { .. } => Domain::Fixed,
            Bounds::Arbitrary { .. } => Domain::Arbitrary,
        }
    }

    pub fn start(&self) -> Number {
        match self {
            Bounds::Fixed { start, .. } => Number::Fixed(*start),
            Bounds::Arbitrary { start, .. } => Number::Arbitrary(start.clone()),
        }
    }

    pub fn stop(&self) -> Number {
        match self {
            Bounds::Fixed { stop, .. } => Number::Fixed(*stop),
            Bounds::Arbitrary { stop, .. } => Number::Arbitrary(stop.clone()),
        }
    }

    pub fn step(&self) -> Number {
        match self {
            Bounds::Fixed { step, .. } => Number::Fixed(*step),
            Bounds::Arbitrary { step, .. } => Number::Arbitrary(step.clone()),
        }
    }

    /// 步长是否为正
    pub fn is_ascending(&self) -> bool {
        match self {
            Bounds::Fixed { step, .. } => *step > 0.0,
            Bounds::Arbitrary { step, .. } => step.is_positive(),
        }
    }

    /// start 本身已不在 stop 之前时序列为空
    pub fn is_empty(&self) -> bool {
        match self {
            Bounds::Fixed { start, stop, .. } if self.is_ascending() => start >= stop,
            Bounds::Fixed { start, stop, .. } => start <= stop,
            Bounds::Arbitrary { start, stop, .. } if self.is_ascending() => start >= stop,
            Bounds::Arbitrary { start, stop, .. } => start <= stop,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} by {}", self.start(), self.stop(), self.step())
    }
}

/// 规范化并校验原始参数
///
/// 所有错误都在这里同步返回，序列构造完成后不会再失败。
pub fn normalize(request: &RangeRequest, config: &DomainConfig) -> Result<Bounds> {
    let result = match select_domain(request, config) {
        Domain::Fixed => normalize_fixed(request),
        Domain::Arbitrary => normalize_arbitrary(request),
    };

    match &result {
        Ok(bounds) => debug!(
            target: TARGET,
            domain = %bounds.domain(),
            bounds = %bounds,
            "range normalized"
        ),
        Err(error) => debug!(target: TARGET, %error, "range rejected"),
    }
    result
}

/// 选择数值域
///
/// 量级判断只看 start/stop 的定宽值；NaN 不会触发提升。
fn select_domain(request: &RangeRequest, config: &DomainConfig) -> Domain {
    let promoted = request.args().any(Arg::is_arbitrary)
        || request
            .start
            .as_ref()
            .is_some_and(|start| config.exceeds(start.to_fixed()))
        || config.exceeds(request.stop.to_fixed());

    if promoted {
        Domain::Arbitrary
    } else {
        Domain::Fixed
    }
}

fn normalize_fixed(request: &RangeRequest) -> Result<Bounds> {
    let start = match &request.start {
        Some(arg) => fixed_bound(arg)?,
        None => 0.0,
    };
    let stop = fixed_bound(&request.stop)?;
    let step = match &request.step {
        Some(arg) => fixed_number(arg)?,
        None if request.start.is_none() => sign(stop),
        None if stop < start => -1.0,
        None => 1.0,
    };

    // -0.0 同样视为零
    if step == 0.0 {
        return Err(RangeError::ZeroStep);
    }

    let bounds = Bounds::Fixed { start, stop, step };
    if !bounds.is_empty() {
        check_progress(start, stop, step)?;
    }
    Ok(bounds)
}

fn normalize_arbitrary(request: &RangeRequest) -> Result<Bounds> {
    let start = match &request.start {
        Some(arg) => arg.to_arbitrary()?,
        None => BigInt::zero(),
    };
    let stop = request.stop.to_arbitrary()?;
    let step = match &request.step {
        Some(arg) => arg.to_arbitrary()?,
        None if request.start.is_none() => stop.signum(),
        None if stop < start => -BigInt::one(),
        None => BigInt::one(),
    };

    if step.is_zero() {
        return Err(RangeError::ZeroStep);
    }

    Ok(Bounds::Arbitrary { start, stop, step })
}

fn fixed_number(arg: &Arg) -> Result<f64> {
    let value = arg.to_fixed();
    if value.is_nan() {
        return Err(RangeError::NotANumber);
    }
    Ok(value)
}

fn fixed_bound(arg: &Arg) -> Result<f64> {
    let value = fixed_number(arg)?;
    if value.is_infinite() {
        return Err(RangeError::Unbounded { value });
    }
    Ok(value)
}

/// sign(0) 为 0，由零步长校验拒绝
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// 检查浮点步长能否推动运行值
///
/// 运行值只落在 `[start, last]` 内（`last` 是 stop 之前的最后一个浮点数），
/// 沿前进方向的相邻间距在区间端点处最大。若 `|step|` 不超过该间距的一半，
/// 加法结果会舍入回原值，序列将永不结束。
fn check_progress(start: f64, stop: f64, step: f64) -> Result<()> {
    let (last, gap): (f64, fn(f64) -> f64) = if step > 0.0 {
        (next_down(stop), gap_up)
    } else {
        (next_up(stop), gap_down)
    };
    let at = if gap(start) >= gap(last) { start } else { last };

    if step.abs() * 2.0 > gap(at) {
        Ok(())
    } else {
        Err(RangeError::Stalled { step, at })
    }
}

/// 大于 value 的最小浮点数（value 有限）
fn next_up(value: f64) -> f64 {
    if value == 0.0 {
        f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        f64::from_bits(value.to_bits() - 1)
    }
}

/// 小于 value 的最大浮点数（value 有限）
fn next_down(value: f64) -> f64 {
    -next_up(-value)
}

/// 向上的相邻间距；在 f64::MAX 处取向下的间距
fn gap_up(value: f64) -> f64 {
    let up = next_up(value);
    if up.is_finite() {
        up - value
    } else {
        value - next_down(value)
    }
}

/// 向下的相邻间距
fn gap_down(value: f64) -> f64 {
    gap_up(-value)
}
