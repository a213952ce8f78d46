//! # bloomsieve
//!
//! Trained, immutable Bloom filters over a reference-exact MurmurHash3
//! x64-128.
//!
//! A filter is trained once from a finite element set and a target
//! correct-answer probability, then answers "might this element be in the
//! set?" forever after. False positives happen at the bounded residual rate
//! the sizing targeted; false negatives never happen.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure logic, no I/O
//!   - `PackedBitSet`: fixed-capacity packed bit array
//!   - `murmur`: MurmurHash3 x64-128 core and input adapters
//!   - `BitPositions`: affine digest-to-position derivation
//!   - `parameters`: optimal sizing formulas
//!   - `BloomFilter` / `FilterTrainer`: the trained filter and its builder
//!   - `FilterConfig` / `FilterConfigBuilder`: training configuration
//! - `error`: crate error taxonomy
//! - `metrics`: caller-driven instrumentation counters
//!
//! ## Invariants
//!
//! - No false negatives: every trained element is reported present.
//! - Residual FPR = (1 - e^(-kn/m))^k, bounded by the sizing formulas.
//! - A trained filter never mutates; concurrent reads need no locking.
//!
//! ## Usage
//!
//! ```
//! use bloomsieve::{train_filter, FilterConfigBuilder, FilterTrainer};
//!
//! // One-shot training with the default configuration.
//! let filter = train_filter(["alpha", "beta", "gamma"], 0.95)?;
//! assert!(filter.contains(&"alpha"));
//! assert!(!filter.contains_opt(None));
//!
//! // Or configure the trainer explicitly.
//! let config = FilterConfigBuilder::new()
//!     .correct_probability(0.99)
//!     .seed(7)
//!     .build()?;
//! let filter = FilterTrainer::with_config(config).train(["alpha", "beta"])?;
//! assert!(filter.contains(&"beta"));
//! # Ok::<(), bloomsieve::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::bit_positions::{derive_positions, BitPositions};
pub use domain::bit_set::PackedBitSet;
pub use domain::bloom_filter::BloomFilter;
pub use domain::config::{FilterConfig, FilterConfigBuilder};
pub use domain::murmur::{hash_str, murmur3_x64_128, murmur3_x64_128_blocks, HashDigest};
pub use domain::parameters::{
    calculate_fpr, calculate_optimal_parameters, clamp_probability, FilterParameters,
};
pub use domain::trainer::{train_filter, FilterTrainer};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
