//! Boolean compositing of figurine, pedestal, and engravings.
//!
//! Fuses the pipeline's three geometry sources into one watertight solid:
//! engraving blocks are subtracted from the pedestal wall, then the
//! pedestal is unioned with the grounded figurine. Evaluation runs on an
//! explicitly constructed [`Evaluator`]; operands travel as [`Brush`]es
//! (mesh + pending translation) and are sanitized before every evaluation.
//!
//! # Quick Start
//!
//! ```
//! use figurine_compose::{compose, Brush, Evaluator};
//! use figurine_types::{cuboid, Vector3};
//!
//! let pedestal = Brush::new(cuboid(4.0, 1.0, 4.0));
//! let figurine = Brush::new(cuboid(2.0, 2.0, 2.0))
//!     .translated(Vector3::new(0.0, 1.4, 0.0));
//!
//! let solid = compose(&figurine, &pedestal, &[], &Evaluator::new()).unwrap();
//! assert!(solid.mesh.volume() > 0.0);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod brush;
mod compose;
mod error;
mod evaluator;

pub use brush::{sanitize, Brush};
pub use compose::{compose, ComposeStats, ComposedSolid};
pub use error::{ComposeError, ComposeResult};
pub use evaluator::Evaluator;
