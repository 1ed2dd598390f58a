//! Material and price estimation for printed keepsakes.
//!
//! Validates that a composed solid is actually printable (closed and
//! consistently oriented), measures it via the divergence theorem, and
//! applies a shell/infill material model to produce mass and price.
//!
//! # Quick Start
//!
//! ```
//! use figurine_estimate::{estimate, EstimateConfig};
//! use figurine_types::cuboid;
//!
//! let solid = cuboid(10.0, 10.0, 10.0);
//! let est = estimate(&solid, &EstimateConfig::default()).unwrap();
//!
//! assert!((est.volume - 1000.0).abs() < 1e-9);
//! let shown = est.rounded();
//! assert!(shown.price > shown.mass);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod estimate;
mod validate;

pub use error::{EstimateError, EstimateResult};
pub use estimate::{estimate, EstimateConfig, MaterialEstimate};
pub use validate::validate_closed;
