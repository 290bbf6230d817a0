//! xrange API - Range entry points
//!
//! Provides the public range interface:
//! - Positional forms (`range`, `range_from`, `range_step`)
//! - Options form with explicit presence checks (`range_with`)
//! - Slice form with arity validation (`range_args`)
//!
//! Every entry point validates its arguments eagerly and returns a lazy,
//! single-pass `RangeSequence`. Configuration is passed explicitly.

pub mod options;
pub use options::RangeOptions;

// Re-export core types
pub use num_bigint::BigInt;
pub use xrange_config;
pub use xrange_config::{DomainConfig, MAX_SAFE_INTEGER};
pub use xrange_core::{
    Arg, Bounds, Domain, ErrorKind, Number, Progression, RangeError, RangeRequest, RangeSequence,
    Result, SequenceState,
};

/// `range(stop)`: from 0 toward `stop`, stepping by `sign(stop)`
///
/// # Example
/// ```
/// use xrange_api::{range, Number};
///
/// let values: Vec<Number> = range(3).unwrap().collect();
/// assert_eq!(values, vec![Number::Fixed(0.0), Number::Fixed(1.0), Number::Fixed(2.0)]);
/// ```
pub fn range(stop: impl Into<Arg>) -> Result<RangeSequence> {
    RangeSequence::new(&RangeRequest::stop(stop), &DomainConfig::default())
}

/// `range(start, stop)`: step is -1 when `stop < start`, otherwise 1
pub fn range_from(start: impl Into<Arg>, stop: impl Into<Arg>) -> Result<RangeSequence> {
    RangeSequence::new(&RangeRequest::between(start, stop), &DomainConfig::default())
}

/// `range(start, stop, step)`: nothing is inferred
pub fn range_step(
    start: impl Into<Arg>,
    stop: impl Into<Arg>,
    step: impl Into<Arg>,
) -> Result<RangeSequence> {
    RangeSequence::new(
        &RangeRequest::stepped(start, stop, step),
        &DomainConfig::default(),
    )
}

/// Range with explicit options
///
/// This is the recommended API when a custom `DomainConfig` is needed.
pub fn range_with(stop: impl Into<Arg>, options: &RangeOptions) -> Result<RangeSequence> {
    RangeSequence::new(&options.request(stop), &options.domain)
}

/// Range over a positional argument slice (1 to 3 arguments)
pub fn range_args(args: &[Arg]) -> Result<RangeSequence> {
    let request = RangeRequest::from_args(args)?;
    RangeSequence::new(&request, &DomainConfig::default())
}
