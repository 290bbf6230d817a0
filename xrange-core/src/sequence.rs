//! 惰性序列
//!
//! `Progression<T>` 是单一数值域内的游标，状态只有不可变三元组和当前运行值；
//! `RangeSequence` 按规范化时选定的数值域包装对应的游标。

use crate::error::Result;
use crate::normalize::{normalize, Bounds, RangeRequest};
use crate::number::{Domain, Number};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive};
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;
use xrange_config::{DomainConfig, Phase, MAX_SAFE_INTEGER};

const TARGET: &str = Phase::Produce.target();

/// 可按步长推进的数值
pub trait Stride: Clone + PartialOrd + fmt::Display + fmt::Debug + Into<Number> {
    /// 运行值加上一个步长
    fn advance(&self, step: &Self) -> Self;

    /// 作为步长时是否为正
    fn ascends(&self) -> bool;

    /// 从 self（含）开始、到达 stop 之前还会产出的值数量；无法精确计算时为 None
    fn remaining(&self, stop: &Self, step: &Self) -> Option<usize>;
}

impl Stride for f64 {
    fn advance(&self, step: &Self) -> Self {
        self + step
    }

    fn ascends(&self) -> bool {
        *self > 0.0
    }

    // 只有运行值和步长都是安全范围内的整数时，累加才是精确的
    fn remaining(&self, stop: &Self, step: &Self) -> Option<usize> {
        let safe = MAX_SAFE_INTEGER as f64;
        let integral = |value: f64| value.fract() == 0.0 && value.abs() <= safe;
        if !integral(*self) || !integral(*step) || stop.abs() > safe {
            return None;
        }

        // 整数 n < stop 等价于 n < ceil(stop)，n > stop 等价于 n > floor(stop)
        let bound = if step.ascends() { stop.ceil() } else { stop.floor() };
        BigInt::from_f64(*self)?.remaining(&BigInt::from_f64(bound)?, &BigInt::from_f64(*step)?)
    }
}

impl Stride for BigInt {
    fn advance(&self, step: &Self) -> Self {
        self + step
    }

    fn ascends(&self) -> bool {
        Signed::is_positive(self)
    }

    fn remaining(&self, stop: &Self, step: &Self) -> Option<usize> {
        let distance = if step.ascends() { stop - self } else { self - stop };
        if !distance.is_positive() {
            return Some(0);
        }
        let step = step.abs();
        ((distance + &step - BigInt::one()) / step).to_usize()
    }
}

/// 序列状态
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
    /// 已规范化，尚未产出
    NotStarted,
    /// 已产出至少一个值
    Producing,
    /// 已到达边界（终态）
    Exhausted,
}

#[derive(Debug)]
enum Cursor<T> {
    NotStarted,
    Producing(T),
    Exhausted,
}

/// 单一数值域内的等差游标
#[derive(Debug)]
pub struct Progression<T: Stride> {
    start: T,
    stop: T,
    step: T,
    cursor: Cursor<T>,
}

impl<T: Stride> Progression<T> {
    /// 调用方需保证 step 非零（由 `normalize` 校验）
    pub(crate) fn new(start: T, stop: T, step: T) -> Self {
        Self {
            start,
            stop,
            step,
            cursor: Cursor::NotStarted,
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn stop(&self) -> &T {
        &self.stop
    }

    pub fn step(&self) -> &T {
        &self.step
    }

    pub fn state(&self) -> SequenceState {
        match self.cursor {
            Cursor::NotStarted => SequenceState::NotStarted,
            Cursor::Producing(_) => SequenceState::Producing,
            Cursor::Exhausted => SequenceState::Exhausted,
        }
    }

    /// 值是否严格位于 stop 之前（按步长方向）
    fn before_stop(&self, value: &T) -> bool {
        if self.step.ascends() {
            *value < self.stop
        } else {
            *value > self.stop
        }
    }
}

impl<T: Stride> Iterator for Progression<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let candidate = match std::mem::replace(&mut self.cursor, Cursor::Exhausted) {
            Cursor::NotStarted => self.start.clone(),
            Cursor::Producing(current) => current.advance(&self.step),
            Cursor::Exhausted => return None,
        };

        if !self.before_stop(&candidate) {
            trace!(target: TARGET, stop = %self.stop, "range exhausted");
            return None;
        }

        trace!(target: TARGET, value = %candidate, "range value produced");
        self.cursor = Cursor::Producing(candidate.clone());
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.cursor {
            Cursor::NotStarted => self.start.remaining(&self.stop, &self.step),
            Cursor::Producing(current) => current
                .advance(&self.step)
                .remaining(&self.stop, &self.step),
            Cursor::Exhausted => Some(0),
        };
        match remaining {
            Some(count) => (count, Some(count)),
            None => (0, None),
        }
    }
}

impl<T: Stride> FusedIterator for Progression<T> {}

#[derive(Debug)]
enum Inner {
    Fixed(Progression<f64>),
    Arbitrary(Progression<BigInt>),
}

/// 惰性区间序列
///
/// 每次调用都得到独立的新序列；同一实例只能向前遍历一次。
///
/// # Example
/// ```
/// use xrange_config::DomainConfig;
/// use xrange_core::{Number, RangeRequest, RangeSequence};
///
/// let request = RangeRequest::stepped(10, 16, 2);
/// let values: Vec<Number> = RangeSequence::new(&request, &DomainConfig::default())
///     .unwrap()
///     .collect();
/// assert_eq!(values, vec![Number::Fixed(10.0), Number::Fixed(12.0), Number::Fixed(14.0)]);
/// ```
#[derive(Debug)]
pub struct RangeSequence {
    inner: Inner,
}

impl RangeSequence {
    /// 规范化参数并创建序列，参数错误在此同步返回
    pub fn new(request: &RangeRequest, config: &DomainConfig) -> Result<Self> {
        normalize(request, config).map(Self::from_bounds)
    }

    /// 由已校验的三元组创建序列
    pub(crate) fn from_bounds(bounds: Bounds) -> Self {
        let inner = match bounds {
            Bounds::Fixed { start, stop, step } => Inner::Fixed(Progression::new(start, stop, step)),
            Bounds::Arbitrary { start, stop, step } => {
                Inner::Arbitrary(Progression::new(start, stop, step))
            }
        };
        Self { inner }
    }

    /// 输出值所属数值域
    pub fn domain(&self) -> Domain {
        match &self.inner {
            Inner::Fixed(_) => Domain::Fixed,
            Inner::Arbitrary(_) => Domain::Arbitrary,
        }
    }

    /// 规范化后的三元组
    pub fn bounds(&self) -> Bounds {
        match &self.inner {
            Inner::Fixed(p) => Bounds::Fixed {
                start: p.start,
                stop: p.stop,
                step: p.step,
            },
            Inner::Arbitrary(p) => Bounds::Arbitrary {
                start: p.start.clone(),
                stop: p.stop.clone(),
                step: p.step.clone(),
            },
        }
    }

    pub fn state(&self) -> SequenceState {
        match &self.inner {
            Inner::Fixed(p) => p.state(),
            Inner::Arbitrary(p) => p.state(),
        }
    }

    /// 取出定宽游标；数值域不符时原样返回
    pub fn into_fixed(self) -> std::result::Result<Progression<f64>, Self> {
        match self.inner {
            Inner::Fixed(p) => Ok(p),
            inner => Err(Self { inner }),
        }
    }

    /// 取出大整数游标；数值域不符时原样返回
    pub fn into_arbitrary(self) -> std::result::Result<Progression<BigInt>, Self> {
        match self.inner {
            Inner::Arbitrary(p) => Ok(p),
            inner => Err(Self { inner }),
        }
    }
}

impl Iterator for RangeSequence {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        match &mut self.inner {
            Inner::Fixed(p) => p.next().map(Number::Fixed),
            Inner::Arbitrary(p) => p.next().map(Number::Arbitrary),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Fixed(p) => p.size_hint(),
            Inner::Arbitrary(p) => p.size_hint(),
        }
    }
}

impl FusedIterator for RangeSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    fn sequence(request: RangeRequest) -> RangeSequence {
        RangeSequence::new(&request, &DomainConfig::default()).unwrap()
    }

    fn floats(request: RangeRequest) -> Vec<f64> {
        sequence(request)
            .into_fixed()
            .expect("expected fixed domain")
            .collect()
    }

    #[test]
    fn test_progression_ascending() {
        let values: Vec<f64> = Progression::new(10.0, 16.0, 2.0).collect();
        assert_eq!(values, vec![10.0, 12.0, 14.0]);
    }

    #[test]
    fn test_progression_descending() {
        let values: Vec<f64> = Progression::new(4.0, -4.0, -2.0).collect();
        assert_eq!(values, vec![4.0, 2.0, 0.0, -2.0]);
    }

    #[test]
    fn test_progression_bigint() {
        let values: Vec<BigInt> =
            Progression::new(BigInt::from(-2), BigInt::from(2), BigInt::from(1)).collect();
        assert_eq!(
            values,
            vec![
                BigInt::from(-2),
                BigInt::from(-1),
                BigInt::from(0),
                BigInt::from(1)
            ]
        );
    }

    #[test]
    fn test_state_machine() {
        let mut p = Progression::new(0.0, 2.0, 1.0);
        assert_eq!(p.state(), SequenceState::NotStarted);

        assert_eq!(p.next(), Some(0.0));
        assert_eq!(p.state(), SequenceState::Producing);

        assert_eq!(p.next(), Some(1.0));
        assert_eq!(p.state(), SequenceState::Producing);

        assert_eq!(p.next(), None);
        assert_eq!(p.state(), SequenceState::Exhausted);

        // 终态不可回退
        assert_eq!(p.next(), None);
        assert_eq!(p.state(), SequenceState::Exhausted);
        assert_eq!(p.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_counts_integer_steps() {
        let mut p = Progression::new(10.0, 16.0, 2.0);
        assert_eq!(p.size_hint(), (3, Some(3)));
        p.next();
        assert_eq!(p.size_hint(), (2, Some(2)));
        p.next();
        p.next();
        assert_eq!(p.size_hint(), (0, Some(0)));

        // 小数 stop：0, 3, 6, 9
        assert_eq!(Progression::new(0.0, 10.5, 3.0).size_hint(), (4, Some(4)));
        // 4, 2, 0, -2, -4
        assert_eq!(Progression::new(4.0, -4.5, -2.0).size_hint(), (5, Some(5)));
        // 方向相反
        assert_eq!(Progression::new(5.0, -5.0, 1.0).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_bigint() {
        let mut p = Progression::new(BigInt::from(0), BigInt::from(-10), BigInt::from(-4));
        assert_eq!(p.size_hint(), (3, Some(3)));
        p.next();
        assert_eq!(p.size_hint(), (2, Some(2)));
        assert_eq!(p.count(), 2);
    }

    #[test]
    fn test_size_hint_unknown_for_fractional_steps() {
        let p = Progression::new(0.25, 1.0, 0.125);
        assert_eq!(p.size_hint(), (0, None));
        assert_eq!(Progression::new(0.5, 3.0, 1.0).size_hint(), (0, None));
        assert_eq!(Progression::new(0.0, 10.0, f64::INFINITY).size_hint(), (0, None));
    }

    #[test]
    fn test_sequence_size_hint() {
        assert_eq!(sequence(RangeRequest::stop(3)).size_hint(), (3, Some(3)));
        let seq = sequence(RangeRequest::stepped(1e16, 10_000_000_000_000_100i64, 30));
        assert_eq!(seq.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_empty_goes_straight_to_exhausted() {
        let mut p = Progression::new(1.0, 1.0, 1.0);
        assert_eq!(p.next(), None);
        assert_eq!(p.state(), SequenceState::Exhausted);
    }

    #[test]
    fn test_float_steps_accumulate() {
        assert_eq!(
            floats(RangeRequest::stepped(0.25, 1, 0.125)),
            vec![0.25, 0.375, 0.5, 0.625, 0.75, 0.875]
        );
    }

    #[test]
    fn test_fixed_domain_values() {
        let values: Vec<Number> = sequence(RangeRequest::stop(3)).collect();
        assert_eq!(
            values,
            vec![Number::Fixed(0.0), Number::Fixed(1.0), Number::Fixed(2.0)]
        );
    }

    #[test]
    fn test_arbitrary_domain_values() {
        let seq = sequence(RangeRequest::stepped(1e16, 10_000_000_000_000_100i64, 30));
        assert_eq!(seq.domain(), Domain::Arbitrary);
        let values: Vec<String> = seq.map(|n| n.to_string()).collect();
        assert_eq!(
            values,
            vec![
                "10000000000000000",
                "10000000000000030",
                "10000000000000060",
                "10000000000000090"
            ]
        );
    }

    #[test]
    fn test_bounds_roundtrip() {
        let seq = sequence(RangeRequest::between(10, 7));
        assert_eq!(
            seq.bounds(),
            Bounds::Fixed {
                start: 10.0,
                stop: 7.0,
                step: -1.0
            }
        );
        assert_eq!(seq.state(), SequenceState::NotStarted);
    }

    #[test]
    fn test_into_domain_mismatch_returns_sequence() {
        let seq = sequence(RangeRequest::stop(3));
        let seq = seq.into_arbitrary().unwrap_err();
        assert_eq!(seq.domain(), Domain::Fixed);
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn test_errors_are_synchronous() {
        let result = RangeSequence::new(&RangeRequest::stepped(1, 10, 0), &DomainConfig::default());
        assert_eq!(result.unwrap_err(), RangeError::ZeroStep);
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut first = sequence(RangeRequest::between(0, 5));
        let second = sequence(RangeRequest::between(0, 5));

        assert_eq!(first.next(), Some(Number::Fixed(0.0)));
        assert_eq!(first.next(), Some(Number::Fixed(1.0)));

        // 消耗 first 不影响 second
        let rest: Vec<Number> = second.collect();
        assert_eq!(rest.len(), 5);
        assert_eq!(first.count(), 3);
    }

    #[test]
    fn test_sequence_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<RangeSequence>();
        assert_send::<Progression<BigInt>>();
    }
}
