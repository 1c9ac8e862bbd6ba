//! # Sealwire Testkit
//!
//! Testing utilities for the Sealwire primitives.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Random sources with scripted or counted draws
//! - **Generators**: Proptest strategies for byte pairs and bounds
//! - **Golden vectors**: Fixed draw scripts with expected samples
//! - **Stats**: Chi-square helpers for checking sampler uniformity
//!
//! ## Scripted Draws
//!
//! ```rust
//! use sealwire_core::BoundedSampler;
//! use sealwire_testkit::fixtures::ScriptedSource;
//!
//! let sampler = BoundedSampler::new(10).unwrap();
//! let mut source = ScriptedSource::new([-4, 42, 3]);
//! assert_eq!(sampler.sample(&mut source), 3);
//! assert_eq!(source.taken(), 3);
//! ```
//!
//! ## Uniformity
//!
//! ```rust
//! use sealwire_core::BoundedSampler;
//! use sealwire_testkit::fixtures::WindowedSource;
//! use sealwire_testkit::stats::{histogram, looks_uniform};
//!
//! let sampler = BoundedSampler::new(10).unwrap();
//! let mut source = WindowedSource::around(7, 10, 5);
//! let samples: Vec<i64> = (0..11_000).map(|_| sampler.sample(&mut source)).collect();
//! assert!(looks_uniform(&histogram(&samples, 10)));
//! ```

pub mod fixtures;
pub mod generators;
pub mod stats;
pub mod vectors;

pub use fixtures::{seeded, CountingSource, ScriptedSource, WindowedSource};
pub use generators::{diverging_pair, masked_bound, wide_rejection_bound};
pub use stats::{chi_square_uniform, histogram, looks_uniform};
pub use vectors::{compare_vectors, sampling_vectors, verify_all_vectors, SamplingVector};
