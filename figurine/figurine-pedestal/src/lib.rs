//! Pedestal construction for figurine keepsakes.
//!
//! Derives pedestal dimensions from a grounded figurine's bounds and builds
//! the filleted-cylinder base by revolving a quarter-arc profile around +Y.
//!
//! # Quick Start
//!
//! ```
//! use figurine_pedestal::{build_pedestal, place_under, PedestalParams, PedestalSpec};
//! use figurine_types::{Aabb, Point3};
//!
//! let bounds = Aabb::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 4.0, 1.0));
//!
//! let spec = PedestalSpec::from_bounds(&bounds, &PedestalParams::default()).unwrap();
//! let mut pedestal = build_pedestal(&spec).unwrap();
//! pedestal.translate(place_under(&bounds, &spec));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod error;
mod params;

pub use builder::{build_pedestal, place_under};
pub use error::{PedestalError, PedestalResult};
pub use params::{PedestalParams, PedestalSpec};
