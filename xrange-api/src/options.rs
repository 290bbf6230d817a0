//! API 层调用选项
//!
//! `RangeOptions` 对应关键字形式的调用：是否给出 start / step 决定推断规则。

use xrange_config::DomainConfig;
use xrange_core::{Arg, RangeRequest};

/// Range call options
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeOptions {
    /// Start value (defaults to 0)
    pub start: Option<Arg>,
    /// Step value (inferred when absent)
    pub step: Option<Arg>,
    /// Numeric domain selection
    pub domain: DomainConfig,
}

impl RangeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: impl Into<Arg>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_step(mut self, step: impl Into<Arg>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn with_domain(mut self, domain: DomainConfig) -> Self {
        self.domain = domain;
        self
    }

    /// Build the request for the given stop value
    ///
    /// - 仅给出 start：按双参数规则推断方向
    /// - 给出 step：三参数形式，start 缺省为 0
    /// - 都未给出：单参数形式
    pub fn request(&self, stop: impl Into<Arg>) -> RangeRequest {
        RangeRequest {
            start: self.start.clone(),
            stop: stop.into(),
            step: self.step.clone(),
        }
    }
}
