//! # Sealwire Core
//!
//! Two leaf primitives for the Sealwire messaging stack:
//!
//! - [`safe_equals`] - byte comparison whose work does not depend on where
//!   the inputs differ
//! - [`get_random_long`] - uniform integer in `[0, MAX_LONG_VALUE]` drawn from
//!   a caller-supplied [`RandomSource`]
//!
//! This crate performs no I/O and holds no state. Randomness is always
//! borrowed from the caller.
//!
//! ## Sampling
//!
//! Bounds of the form `2^k - 1` take one masked draw. Other bounds use
//! rejection sampling with no iteration cap; see [`random`] for the cost.

pub mod compare;
pub mod config;
pub mod error;
pub mod random;

pub use compare::{safe_equals, try_safe_equals};
pub use config::SamplerConfig;
pub use error::{PrimitiveError, Result};
pub use random::{
    get_random_long, get_random_long_bounded, is_power_of_two, secure_source, BoundedSampler,
    RandomSource, MAX_LONG_VALUE,
};
