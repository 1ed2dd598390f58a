//! End-to-end keepsake pipeline.
//!
//! Turns a raw figurine mesh into a priced, printable keepsake: ground
//! and center the mesh, size and build a filleted pedestal under it,
//! engrave up to two lines of text into the pedestal wall, fuse
//! everything into one watertight solid, and estimate material and
//! price.
//!
//! [`run_pipeline`] is the synchronous stage chain. [`Pipeline`] wraps
//! it in a background worker with debouncing and supersession, so a UI
//! can resubmit on every edit and only the newest state gets computed.
//!
//! # Quick Start
//!
//! ```
//! use figurine_pipeline::{run_pipeline, PipelineConfig};
//! use figurine_engrave::EngravingSpec;
//! use figurine_types::cuboid;
//!
//! let figurine = cuboid(10.0, 14.0, 8.0);
//! let keepsake = run_pipeline(
//!     &figurine,
//!     &EngravingSpec::empty(),
//!     None,
//!     &PipelineConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(keepsake.estimate.rounded().price > 12.0);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod run;
mod worker;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use run::{run_pipeline, Keepsake};
pub use worker::{Generation, Pipeline, Poll};

// The request types callers hand to the pipeline
pub use figurine_engrave::{EngravingSpec, Typeface};
