//! Hotspot Environment Abstraction Layer
//!
//! Every source of randomness in the hotspot simulation goes through a
//! [`HotspotContext`]. Nothing reads process-wide RNG state: the point
//! generator, the clustering initialisation and the unit reference points all
//! pull from the context they are handed.
//!
//! # Implementations
//!
//! - [`SeededContext`]: ChaCha8 seeded from a 64-bit master seed. Any run is
//!   reproducible from its seed number.
//! - [`EntropyContext`]: draws the master seed from OS entropy, then behaves
//!   like a seeded context so the chosen seed can still be logged and replayed.
//!
//! # Example
//!
//! ```
//! use hotspot_env::{HotspotContext, SeededContext};
//!
//! let mut a = SeededContext::new(42);
//! let mut b = SeededContext::new(42);
//! assert_eq!(a.unit_f64(), b.unit_f64());
//! ```

mod context;
mod seeded;
mod entropy;
mod error;

pub use context::HotspotContext;
pub use seeded::SeededContext;
pub use entropy::EntropyContext;
pub use error::EnvError;
